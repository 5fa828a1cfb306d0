//! HTTP client for storefront pages and the public `products.json` feed.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::ScraperError;

/// Timeout applied to every outbound fetch when the caller does not configure one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after any redirects the client followed.
    pub url: Url,
    pub status: u16,
    pub body: String,
}

/// Single-attempt page fetcher shared by the homepage, feed and FAQ requests.
///
/// Holds one pooled `reqwest::Client`, so cloning the fetcher (or sharing it
/// behind an `Arc`) reuses connections across pipeline runs. There is no
/// retry: each call performs exactly one GET bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Performs one GET against `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`]: HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: DNS, connect, timeout or body read failure.
    pub async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, ScraperError> {
        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/json;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await?;
        tracing::debug!(url = %final_url, status = status.as_u16(), bytes = body.len(), "fetched page");

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }
}

/// Parses a caller-supplied store URL, accepting only `http` and `https`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] when the string is not an absolute
/// URL or uses another scheme.
pub fn parse_store_url(raw: &str) -> Result<Url, ScraperError> {
    let url = Url::parse(raw.trim()).map_err(|e| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScraperError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
