use std::collections::{BTreeMap, HashSet};

use crate::document::Document;
use crate::extract::rules::{CONTACT_LIMIT, EMAIL_RE, PHONE_RE};
use crate::types::ContactKind;

/// Email addresses and phone-like strings found anywhere in the page text.
///
/// Each kind keeps at most [`CONTACT_LIMIT`] unique values in first-seen
/// order. A kind with no matches is left out of the map entirely.
#[must_use]
pub fn extract_contact_details(doc: &Document) -> BTreeMap<ContactKind, Vec<String>> {
    let text = doc.full_text();
    let mut details = BTreeMap::new();

    let emails = unique_limited(EMAIL_RE.find_iter(&text).map(|m| m.as_str()));
    if !emails.is_empty() {
        details.insert(ContactKind::Emails, emails);
    }

    // A whitespace-only run satisfies the phone pattern but is not phone-like.
    let phones = unique_limited(
        PHONE_RE
            .find_iter(&text)
            .map(|m| m.as_str().trim())
            .filter(|phone| !phone.is_empty()),
    );
    if !phones.is_empty() {
        details.insert(ContactKind::Phones, phones);
    }

    details
}

fn unique_limited<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .take(CONTACT_LIMIT)
        .map(str::to_owned)
        .collect()
}
