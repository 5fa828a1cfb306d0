//! Independent best-effort extractors.
//!
//! Each extractor returns a plain value (`Vec`, `Option` or map) and never an
//! error: absence and partial failure degrade to the empty value.

pub mod brand;
pub mod catalog;
pub mod contact;
pub mod faq;
pub mod hero;
pub mod links;
pub mod policy;
pub mod rules;
pub mod social;

mod first_match;

pub use brand::extract_brand_context;
pub use catalog::{fetch_product_catalog, parse_product_feed, products_feed_url};
pub use contact::extract_contact_details;
pub use faq::{extract_faq_entries, fetch_faqs, find_faq_link};
pub use hero::extract_hero_products;
pub use links::extract_important_links;
pub use policy::{extract_policy_link, extract_policy_links};
pub use social::extract_social_handles;
