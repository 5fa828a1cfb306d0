//! Storefront insights scraper.
//!
//! Fetches a store's homepage, its public `products.json` feed and one
//! discovered FAQ page, and runs independent heuristic extractors over them
//! to build a [`BrandInsights`] record.

pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod insights;
pub mod types;

pub use client::{parse_store_url, FetchedPage, PageFetcher, DEFAULT_TIMEOUT_SECS};
pub use document::Document;
pub use error::{InsightsError, ScraperError};
pub use insights::InsightsFetcher;
pub use types::{
    BrandInsights, ContactKind, FaqEntry, HeroProduct, LinkKind, PolicyKind, Product,
    SocialPlatform,
};
