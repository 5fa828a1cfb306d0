//! Ordered selector, keyword and pattern tables driving the extractors.
//!
//! Order is significant everywhere: earlier entries win over later ones.
//! The `&str` tables are the source of truth; the `LazyLock` statics compile
//! them once per process.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::types::{LinkKind, PolicyKind, SocialPlatform};

pub const ELLIPSIS: &str = "...";

pub const PRODUCTS_FEED_PATH: &str = "/products.json";

/// Product-tile patterns used by common storefront themes, highest priority first.
pub const HERO_PRODUCT_SELECTORS: &[&str] = &[
    ".product-item",
    ".product-card",
    ".featured-product",
    "[data-product-id]",
    ".product",
    ".grid-product__content",
];
pub const HERO_TITLE_SELECTOR: &str = "h2, h3, h4, .product-title";
pub const HERO_PRODUCT_LIMIT: usize = 5;

pub const POLICY_KEYWORDS: &[(PolicyKind, &[&str])] = &[
    (PolicyKind::Privacy, &["privacy", "privacy policy"]),
    (
        PolicyKind::Return,
        &["return", "refund", "return policy", "refund policy"],
    ),
];

pub const FAQ_LINK_KEYWORD: &str = "faq";
pub const FAQ_CONTAINER_SELECTOR: &str = "details, .faq-item, .accordion-item";
pub const FAQ_QUESTION_SELECTOR: &str = "summary, .question, h3, h4";
pub const FAQ_ANSWER_SELECTOR: &str = ".answer, .content, p";
pub const FAQ_LIMIT: usize = 5;
pub const FAQ_ANSWER_MAX_CHARS: usize = 200;

/// Capture group 1 is the handle.
pub const SOCIAL_PATTERNS: &[(SocialPlatform, &str)] = &[
    (SocialPlatform::Instagram, r"instagram\.com/([^/\s?]+)"),
    (SocialPlatform::Facebook, r"facebook\.com/([^/\s?]+)"),
    (SocialPlatform::Twitter, r"twitter\.com/([^/\s?]+)"),
    (SocialPlatform::Tiktok, r"tiktok\.com/@([^/\s?]+)"),
];

pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";
/// Deliberately loose: any 10–15 character run of digits and separators.
/// Dates, prices and order numbers will match too.
pub const PHONE_PATTERN: &str = r"[\+]?[1-9]?[\d\s\-\(\)]{10,15}";
pub const CONTACT_LIMIT: usize = 3;

pub const ABOUT_SELECTORS: &[&str] = &[".about", "#about", ".brand-story", ".our-story"];
pub const BRAND_CONTEXT_MAX_CHARS: usize = 300;

pub const IMPORTANT_LINK_KEYWORDS: &[(LinkKind, &[&str])] = &[
    (LinkKind::Contact, &["contact", "contact us"]),
    (
        LinkKind::TrackOrder,
        &["track", "order", "track order", "order tracking"],
    ),
    (LinkKind::Blog, &["blog", "news", "articles"]),
];

pub(crate) static HERO_PRODUCT_RULES: LazyLock<Vec<(&'static str, Selector)>> =
    LazyLock::new(|| compile_selectors(HERO_PRODUCT_SELECTORS));
pub(crate) static HERO_TITLE: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(HERO_TITLE_SELECTOR));

pub(crate) static FAQ_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(FAQ_CONTAINER_SELECTOR));
pub(crate) static FAQ_QUESTION: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(FAQ_QUESTION_SELECTOR));
pub(crate) static FAQ_ANSWER: LazyLock<Selector> =
    LazyLock::new(|| compile_selector(FAQ_ANSWER_SELECTOR));

pub(crate) static SOCIAL_RULES: LazyLock<Vec<(SocialPlatform, Regex)>> = LazyLock::new(|| {
    SOCIAL_PATTERNS
        .iter()
        .map(|(platform, pattern)| (*platform, Regex::new(pattern).expect("valid social regex")))
        .collect()
});

pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));
pub(crate) static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"));

pub(crate) static ABOUT_RULES: LazyLock<Vec<(&'static str, Selector)>> =
    LazyLock::new(|| compile_selectors(ABOUT_SELECTORS));

/// Keywords for one policy kind; empty if the kind has no table entry.
#[must_use]
pub fn policy_keywords(kind: PolicyKind) -> &'static [&'static str] {
    POLICY_KEYWORDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Whether `haystack` contains any of `keywords` as a substring.
pub(crate) fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn compile_selector(pattern: &str) -> Selector {
    Selector::parse(pattern).expect("valid extraction selector")
}

fn compile_selectors(patterns: &'static [&'static str]) -> Vec<(&'static str, Selector)> {
    patterns
        .iter()
        .map(|pattern| (*pattern, compile_selector(pattern)))
        .collect()
}
