use std::collections::BTreeMap;

use reqwest::Url;

use crate::document::{resolve_href, Document};
use crate::extract::first_match::resolve_if_absent;
use crate::extract::rules::{contains_any, IMPORTANT_LINK_KEYWORDS};
use crate::types::LinkKind;

/// Contact, order-tracking and blog links, matched on anchor text only.
#[must_use]
pub fn extract_important_links(doc: &Document, base: &Url) -> BTreeMap<LinkKind, String> {
    let mut links = BTreeMap::new();

    for anchor in doc.anchors() {
        let text = anchor.text_lower();
        for (kind, keywords) in IMPORTANT_LINK_KEYWORDS {
            if contains_any(&text, keywords) {
                resolve_if_absent(&mut links, *kind, || resolve_href(base, anchor.href));
            }
        }
        if links.len() == IMPORTANT_LINK_KEYWORDS.len() {
            break;
        }
    }

    links
}
