use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use shopintel_scraper::{parse_store_url, BrandInsights, InsightsError};

use super::{ApiError, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct FetchInsightsRequest {
    website_url: String,
}

/// POST /fetch-insights: run the pipeline for one storefront.
///
/// The record is returned bare on success; failures use the error envelope.
pub(super) async fn fetch_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<FetchInsightsRequest>, JsonRejection>,
) -> Result<Json<BrandInsights>, ApiError> {
    let rid = req_id.0;

    let Json(body) =
        body.map_err(|rejection| ApiError::new(&rid, "validation_error", rejection.body_text()))?;
    if let Err(e) = parse_store_url(&body.website_url) {
        return Err(ApiError::new(
            &rid,
            "validation_error",
            format!("website_url must be an absolute http(s) URL: {e}"),
        ));
    }

    tracing::info!(request_id = %rid, website_url = %body.website_url, "fetching insights");

    state
        .fetcher
        .clone()
        .fetch_insights_isolated(body.website_url)
        .await
        .map(Json)
        .map_err(|e| map_insights_error(rid, &e))
}

fn map_insights_error(request_id: String, error: &InsightsError) -> ApiError {
    match error {
        InsightsError::NotFound { url } => {
            tracing::info!(url, "storefront not found");
            ApiError::new(request_id, "website_not_found", "Website not found")
        }
        InsightsError::Fetch { url, source } => {
            tracing::warn!(url, error = %source, "storefront fetch failed");
            ApiError::new(request_id, "fetch_error", "Error fetching website data")
        }
        InsightsError::Internal(description) => {
            tracing::error!(error = %description, "insights pipeline failed");
            ApiError::new(
                request_id,
                "internal_error",
                format!("Internal server error: {description}"),
            )
        }
    }
}
