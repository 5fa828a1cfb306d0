use thiserror::Error;

/// Failures of a single outbound fetch or of decoding its payload.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Pipeline-level failure for one insights request.
///
/// Only the homepage fetch can fail the pipeline; every extractor degrades to
/// an empty value instead of returning an error.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("website not found: {url}")]
    NotFound { url: String },

    #[error("error fetching website data from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: ScraperError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl InsightsError {
    /// Classifies a homepage fetch failure.
    pub(crate) fn from_homepage(url: &str, error: ScraperError) -> Self {
        match error {
            ScraperError::NotFound { url } => Self::NotFound { url },
            ScraperError::Http(_) | ScraperError::UnexpectedStatus { .. } => Self::Fetch {
                url: url.to_owned(),
                source: error,
            },
            other @ (ScraperError::Deserialize { .. } | ScraperError::InvalidUrl { .. }) => {
                Self::Internal(other.to_string())
            }
        }
    }
}
