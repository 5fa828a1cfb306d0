//! Feed payload types and the insights output record.
//!
//! ## `products.json` tags
//! Current storefronts return `tags` as a **JSON array of strings**, while the
//! legacy Liquid-era shape is a single comma-separated string
//! (`"red,blue"`). Both appear in the wild, so the raw field is modelled as
//! [`FeedTags`] and flattened into `Vec<String>` when mapping to [`Product`]:
//! - non-empty string: split on `,` verbatim (no trimming of the pieces);
//! - array: passed through unchanged;
//! - empty string, `null`, missing, or any other JSON type: `[]`.
//!
//! ## Scalar fields
//! `id`, `title`, `handle`, `product_type` and `vendor` are passed through
//! as-is. Every field is optional so a sparse entry never fails the whole feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductFeed {
    #[serde(default)]
    pub products: Vec<FeedProduct>,
}

/// One entry of the product feed, before mapping.
#[derive(Debug, Deserialize)]
pub struct FeedProduct {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub tags: Option<FeedTags>,
}

/// Raw `tags` field as it appears in the feed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FeedTags {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl FeedTags {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FeedTags::Text(text) if !text.is_empty() => {
                text.split(',').map(str::to_owned).collect()
            }
            FeedTags::List(list) => list,
            FeedTags::Text(_) | FeedTags::Other(_) => Vec::new(),
        }
    }
}

/// A catalog entry from the store's product feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub handle: Option<String>,
    pub product_type: Option<String>,
    pub vendor: Option<String>,
    pub tags: Vec<String>,
}

impl From<FeedProduct> for Product {
    fn from(raw: FeedProduct) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            handle: raw.handle,
            product_type: raw.product_type,
            vendor: raw.vendor,
            tags: raw.tags.map(FeedTags::into_vec).unwrap_or_default(),
        }
    }
}

/// A product tile featured on the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroProduct {
    pub title: String,
    /// The selector pattern that located the tile.
    pub selector_used: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Privacy,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Twitter,
    Tiktok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Emails,
    Phones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Contact,
    TrackOrder,
    Blog,
}

/// Everything the pipeline learned about one storefront.
///
/// Every field is always present when serialized: collections default to
/// empty and optional links to `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInsights {
    pub website_url: String,
    pub product_catalog: Vec<Product>,
    pub hero_products: Vec<HeroProduct>,
    pub privacy_policy: Option<String>,
    pub return_policy: Option<String>,
    pub faqs: Vec<FaqEntry>,
    pub social_handles: BTreeMap<SocialPlatform, String>,
    pub contact_details: BTreeMap<ContactKind, Vec<String>>,
    pub brand_context: Option<String>,
    pub important_links: BTreeMap<LinkKind, String>,
}

impl BrandInsights {
    /// An empty, fully shaped record for `website_url`.
    #[must_use]
    pub fn empty(website_url: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
            ..Self::default()
        }
    }
}
