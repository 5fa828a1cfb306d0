use crate::document::{element_text, truncate_chars, Document};
use crate::extract::rules::{ABOUT_RULES, BRAND_CONTEXT_MAX_CHARS, ELLIPSIS};

/// Short description of the brand.
///
/// Prefers the first "about"-style section, falling back to the meta
/// description. The ellipsis is only added on the section path, and only when
/// the text was actually cut.
#[must_use]
pub fn extract_brand_context(doc: &Document) -> Option<String> {
    if let Some(section) = ABOUT_RULES
        .iter()
        .find_map(|(_, selector)| doc.select_first(selector))
    {
        let text = element_text(section);
        let (head, truncated) = truncate_chars(&text, BRAND_CONTEXT_MAX_CHARS);
        return Some(if truncated {
            format!("{head}{ELLIPSIS}")
        } else {
            head.to_owned()
        });
    }

    doc.meta_description()
        .map(|content| truncate_chars(content, BRAND_CONTEXT_MAX_CHARS).0.to_owned())
}
