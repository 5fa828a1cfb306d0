use std::collections::BTreeMap;

use crate::document::Document;
use crate::extract::first_match::resolve_if_absent;
use crate::extract::rules::SOCIAL_RULES;
use crate::types::SocialPlatform;

/// Handles captured from social profile links, one per platform.
#[must_use]
pub fn extract_social_handles(doc: &Document) -> BTreeMap<SocialPlatform, String> {
    let mut handles = BTreeMap::new();

    for anchor in doc.anchors() {
        for (platform, pattern) in SOCIAL_RULES.iter() {
            resolve_if_absent(&mut handles, *platform, || {
                pattern
                    .captures(anchor.href)
                    .and_then(|caps| caps.get(1))
                    .map(|handle| handle.as_str().to_owned())
            });
        }
    }

    handles
}
