use std::collections::BTreeMap;

use reqwest::Url;

use crate::document::{resolve_href, Document};
use crate::extract::first_match::resolve_if_absent;
use crate::extract::rules::{contains_any, POLICY_KEYWORDS};
use crate::types::PolicyKind;

/// Absolute URL of the first anchor mentioning `kind` in its text or `href`.
#[must_use]
pub fn extract_policy_link(doc: &Document, base: &Url, kind: PolicyKind) -> Option<String> {
    extract_policy_links(doc, base).remove(&kind)
}

/// Every policy kind resolved in a single pass over the anchors.
#[must_use]
pub fn extract_policy_links(doc: &Document, base: &Url) -> BTreeMap<PolicyKind, String> {
    let mut links = BTreeMap::new();

    for anchor in doc.anchors() {
        let text = anchor.text_lower();
        let href = anchor.href_lower();
        for (kind, keywords) in POLICY_KEYWORDS {
            if contains_any(&text, keywords) || contains_any(&href, keywords) {
                resolve_if_absent(&mut links, *kind, || resolve_href(base, anchor.href));
            }
        }
        if links.len() == POLICY_KEYWORDS.len() {
            break;
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.example.com/").unwrap()
    }

    #[test]
    fn return_policy_resolves_relative_href() {
        let doc = Document::parse(
            r#"<html><body><footer>
                <a href="/pages/about">About</a>
                <a href="/pages/returns">Return &amp; Refund Policy</a>
            </footer></body></html>"#,
        );
        assert_eq!(
            extract_policy_link(&doc, &base(), PolicyKind::Return).as_deref(),
            Some("https://shop.example.com/pages/returns")
        );
    }

    #[test]
    fn href_keyword_matches_without_text() {
        let doc = Document::parse(
            r#"<html><body><a href="/policies/privacy-policy"><img src="x.png"></a></body></html>"#,
        );
        assert_eq!(
            extract_policy_link(&doc, &base(), PolicyKind::Privacy).as_deref(),
            Some("https://shop.example.com/policies/privacy-policy")
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_first_wins() {
        let doc = Document::parse(
            r#"<html><body>
                <a href="/policies/refund-policy">REFUNDS</a>
                <a href="/pages/returns">Returns</a>
            </body></html>"#,
        );
        assert_eq!(
            extract_policy_link(&doc, &base(), PolicyKind::Return).as_deref(),
            Some("https://shop.example.com/policies/refund-policy")
        );
    }

    #[test]
    fn absolute_href_is_kept() {
        let doc = Document::parse(
            r#"<html><body><a href="https://legal.example.org/privacy">Privacy</a></body></html>"#,
        );
        assert_eq!(
            extract_policy_link(&doc, &base(), PolicyKind::Privacy).as_deref(),
            Some("https://legal.example.org/privacy")
        );
    }

    #[test]
    fn missing_policy_is_none() {
        let doc = Document::parse(r#"<html><body><a href="/cart">Cart</a></body></html>"#);
        let links = extract_policy_links(&doc, &base());
        assert!(links.is_empty());
        assert_eq!(extract_policy_link(&doc, &base(), PolicyKind::Privacy), None);
    }
}
