//! Orchestrates one insights run: homepage fetch, extractors, secondary fetches.

use std::sync::Arc;

use reqwest::Url;

use crate::client::{parse_store_url, PageFetcher};
use crate::document::Document;
use crate::error::{InsightsError, ScraperError};
use crate::extract::{
    extract_brand_context, extract_contact_details, extract_hero_products,
    extract_important_links, extract_policy_links, extract_social_handles, fetch_faqs,
    fetch_product_catalog, find_faq_link,
};
use crate::types::{BrandInsights, PolicyKind};

/// Builds [`BrandInsights`] for a storefront.
///
/// Cheap to share: one instance (typically behind an `Arc`) serves every
/// request and reuses the underlying connection pool. Runs hold no shared
/// mutable state.
#[derive(Debug, Clone)]
pub struct InsightsFetcher {
    fetcher: PageFetcher,
}

impl InsightsFetcher {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        Ok(Self::from_fetcher(PageFetcher::new(timeout_secs, user_agent)?))
    }

    #[must_use]
    pub fn from_fetcher(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Runs the full pipeline for `website_url`.
    ///
    /// Issues at most three requests, in sequence: the homepage, the product
    /// feed and, if the homepage links to one, the FAQ page. Only the homepage
    /// can fail the run.
    ///
    /// # Errors
    ///
    /// - [`InsightsError::NotFound`]: the homepage answered 404.
    /// - [`InsightsError::Fetch`]: network failure or other non-2xx status.
    /// - [`InsightsError::Internal`]: `website_url` is not a usable http(s) URL.
    pub async fn fetch_insights(&self, website_url: &str) -> Result<BrandInsights, InsightsError> {
        let base =
            parse_store_url(website_url).map_err(|e| InsightsError::Internal(e.to_string()))?;

        let homepage = self
            .fetcher
            .fetch_page(&base)
            .await
            .map_err(|e| InsightsError::from_homepage(website_url, e))?;

        let (mut insights, faq_link) = extract_homepage(website_url, &base, &homepage.body);

        insights.product_catalog = fetch_product_catalog(&self.fetcher, &base).await;
        if let Some(link) = faq_link {
            insights.faqs = fetch_faqs(&self.fetcher, &link).await;
        }

        tracing::info!(
            website_url,
            products = insights.product_catalog.len(),
            hero_products = insights.hero_products.len(),
            faqs = insights.faqs.len(),
            social_handles = insights.social_handles.len(),
            important_links = insights.important_links.len(),
            "collected store insights"
        );

        Ok(insights)
    }

    /// Runs [`Self::fetch_insights`] on its own task so that a panic anywhere
    /// in the pipeline is reported as [`InsightsError::Internal`] instead of
    /// unwinding into the caller.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_insights`], plus `Internal` for a panicked or
    /// cancelled task.
    pub async fn fetch_insights_isolated(
        self: Arc<Self>,
        website_url: String,
    ) -> Result<BrandInsights, InsightsError> {
        let task = tokio::spawn(async move { self.fetch_insights(&website_url).await });
        match task.await {
            Ok(result) => result,
            Err(join_error) => {
                let description = describe_join_error(join_error);
                tracing::error!(error = %description, "insights task failed");
                Err(InsightsError::Internal(description))
            }
        }
    }
}

/// Runs every homepage extractor. Returns the partially filled record and
/// the discovered FAQ link.
///
/// Kept synchronous so the parsed document never lives across an `.await`.
fn extract_homepage(website_url: &str, base: &Url, body: &str) -> (BrandInsights, Option<Url>) {
    let doc = Document::parse(body);
    let mut policies = extract_policy_links(&doc, base);

    let insights = BrandInsights {
        website_url: website_url.to_owned(),
        hero_products: extract_hero_products(&doc),
        privacy_policy: policies.remove(&PolicyKind::Privacy),
        return_policy: policies.remove(&PolicyKind::Return),
        social_handles: extract_social_handles(&doc),
        contact_details: extract_contact_details(&doc),
        brand_context: extract_brand_context(&doc),
        important_links: extract_important_links(&doc, base),
        ..BrandInsights::empty(website_url)
    };

    (insights, find_faq_link(&doc, base))
}

fn describe_join_error(join_error: tokio::task::JoinError) -> String {
    if !join_error.is_panic() {
        return join_error.to_string();
    }
    let payload = join_error.into_panic();
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "pipeline panicked".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_homepage_fills_every_homepage_field() {
        let base = Url::parse("https://shop.example.com/").unwrap();
        let body = r#"<html><head><meta name="description" content="Craft sodas."></head><body>
            <div class="product-card"><h3>Root Beer</h3></div>
            <a href="/policies/privacy-policy">Privacy</a>
            <a href="/policies/refund-policy">Refunds</a>
            <a href="/pages/faq">FAQ</a>
            <a href="/pages/contact">Contact</a>
            <a href="https://instagram.com/sodaco">IG</a>
            <p>hello@sodaco.com </p>
        </body></html>"#;

        let (insights, faq_link) = extract_homepage("https://shop.example.com", &base, body);

        assert_eq!(insights.website_url, "https://shop.example.com");
        assert_eq!(insights.hero_products.len(), 1);
        assert_eq!(
            insights.privacy_policy.as_deref(),
            Some("https://shop.example.com/policies/privacy-policy")
        );
        assert_eq!(
            insights.return_policy.as_deref(),
            Some("https://shop.example.com/policies/refund-policy")
        );
        assert_eq!(insights.brand_context.as_deref(), Some("Craft sodas."));
        assert_eq!(insights.social_handles.len(), 1);
        assert_eq!(insights.important_links.len(), 1);
        assert!(insights.product_catalog.is_empty());
        assert!(insights.faqs.is_empty());
        assert_eq!(
            faq_link.map(String::from).as_deref(),
            Some("https://shop.example.com/pages/faq")
        );
    }

    #[test]
    fn empty_homepage_yields_fully_shaped_record() {
        let base = Url::parse("https://shop.example.com/").unwrap();
        let (insights, faq_link) = extract_homepage("https://shop.example.com/", &base, "");
        assert_eq!(insights, BrandInsights::empty("https://shop.example.com/"));
        assert!(faq_link.is_none());

        let json = serde_json::to_value(&insights).unwrap();
        for key in [
            "website_url",
            "product_catalog",
            "hero_products",
            "privacy_policy",
            "return_policy",
            "faqs",
            "social_handles",
            "contact_details",
            "brand_context",
            "important_links",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json["privacy_policy"].is_null());
        assert_eq!(json["important_links"], serde_json::json!({}));
    }
}
