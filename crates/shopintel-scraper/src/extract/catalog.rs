use reqwest::Url;

use crate::client::PageFetcher;
use crate::error::ScraperError;
use crate::extract::rules::PRODUCTS_FEED_PATH;
use crate::types::{Product, ProductFeed};

/// Feed URL for a store: `/products.json` resolved against `base`, replacing
/// any path and query the base carries.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `base` cannot act as a join base.
pub fn products_feed_url(base: &Url) -> Result<Url, ScraperError> {
    base.join(PRODUCTS_FEED_PATH)
        .map_err(|e| ScraperError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })
}

/// Maps a `products.json` payload to catalog entries, in feed order.
///
/// # Errors
///
/// Returns [`ScraperError::Deserialize`] if the body is not a JSON object of
/// the expected shape.
pub fn parse_product_feed(body: &str) -> Result<Vec<Product>, ScraperError> {
    let feed = serde_json::from_str::<ProductFeed>(body).map_err(|e| ScraperError::Deserialize {
        context: "products feed".to_string(),
        source: e,
    })?;
    Ok(feed.products.into_iter().map(Product::from).collect())
}

/// Fetches and maps the store's product feed.
///
/// Never fails: any URL, network, status or payload error degrades to an
/// empty catalog.
pub async fn fetch_product_catalog(fetcher: &PageFetcher, base: &Url) -> Vec<Product> {
    let url = match products_feed_url(base) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(base = %base, error = %e, "cannot build products feed URL");
            return Vec::new();
        }
    };

    let page = match fetcher.fetch_page(&url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "products feed unavailable");
            return Vec::new();
        }
    };

    match parse_product_feed(&page.body) {
        Ok(products) => {
            tracing::debug!(url = %url, count = products.len(), "parsed products feed");
            products
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "products feed is not valid JSON");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
