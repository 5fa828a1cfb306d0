//! Parsed HTML document with the handful of queries the extractors need.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{html::Select, ElementRef, Html, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));
/// Elements whose text content is never rendered.
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("valid meta description selector")
});

/// An `<a href>` element: its raw `href` and whitespace-normalized visible text.
#[derive(Debug, Clone)]
pub struct Anchor<'a> {
    pub href: &'a str,
    pub text: String,
}

impl Anchor<'_> {
    /// Lowercased visible text, for keyword matching.
    #[must_use]
    pub fn text_lower(&self) -> String {
        self.text.to_lowercase()
    }

    #[must_use]
    pub fn href_lower(&self) -> String {
        self.href.to_lowercase()
    }
}

/// In-memory tree of one fetched page.
///
/// Not `Send`: build it, query it and drop it without holding it across an
/// `.await`.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML document. Parsing is error-tolerant and never fails.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Every anchor carrying an `href`, in document order.
    pub fn anchors(&self) -> impl Iterator<Item = Anchor<'_>> {
        self.html.select(&ANCHOR_SELECTOR).filter_map(|element| {
            let href = element.value().attr("href")?;
            Some(Anchor {
                href,
                text: element_text(element),
            })
        })
    }

    /// Visible text of the document: every text node outside
    /// `script`, `style`, `noscript` and `template`, concatenated without
    /// separators.
    #[must_use]
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        push_visible_text(self.html.root_element(), &mut text);
        text
    }

    /// `content` of the first `<meta name="description">`. A tag without a
    /// `content` attribute yields an empty string.
    #[must_use]
    pub fn meta_description(&self) -> Option<&str> {
        self.select_first(&META_DESCRIPTION_SELECTOR)
            .map(|meta| meta.value().attr("content").unwrap_or(""))
    }
}

/// Text of an element with whitespace runs collapsed to one space and the
/// ends trimmed. Adjacent text nodes are joined before collapsing, so inline
/// markup inside a word does not split it.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !HIDDEN_TEXT_ELEMENTS.contains(&child_element.value().name()) {
                push_visible_text(child_element, out);
            }
        }
    }
}

/// Splits `text` after `max_chars` characters.
///
/// Returns the kept prefix and whether anything was cut off.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// Resolves an `href` against the page's base URL.
///
/// `None` when the reference cannot be joined (e.g. a malformed host).
#[must_use]
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_skip_elements_without_href() {
        let doc = Document::parse(
            r#"<html><body><a>no href</a><a href="/one"> One
                <span>link</span></a></body></html>"#,
        );
        let anchors: Vec<_> = doc.anchors().collect();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "/one");
        assert_eq!(anchors[0].text, "One link");
    }

    #[test]
    fn meta_description_without_content_is_empty() {
        let doc = Document::parse(r#"<html><head><meta name="description"></head></html>"#);
        assert_eq!(doc.meta_description(), Some(""));
    }

    #[test]
    fn meta_description_absent() {
        let doc = Document::parse("<html><head><title>x</title></head></html>");
        assert_eq!(doc.meta_description(), None);
    }

    #[test]
    fn full_text_concatenates_text_nodes() {
        let doc = Document::parse("<html><body><p>a@b.co</p><p>next</p></body></html>");
        assert!(doc.full_text().contains("a@b.conext"));
    }

    #[test]
    fn full_text_skips_script_and_style() {
        let doc = Document::parse(
            r#"<html><head><style>.a{color:red}</style>
            <script>window.cfg={"dsn":"sentry@cdn-tracker.io","pageId":12345678901234};</script>
            </head><body><p>Visit us.</p><noscript>Enable JS</noscript></body></html>"#,
        );
        let text = doc.full_text();
        assert!(text.contains("Visit us."));
        assert!(!text.contains("sentry"));
        assert!(!text.contains("color"));
        assert!(!text.contains("Enable JS"));
    }

    #[test]
    fn element_text_keeps_words_split_by_inline_markup() {
        let doc = Document::parse(
            "<html><body><h3>Brew<b>ed</b> in Austin<sup>&reg;</sup></h3></body></html>",
        );
        let heading = doc
            .select_first(&Selector::parse("h3").unwrap())
            .expect("heading");
        assert_eq!(element_text(heading), "Brewed in Austin\u{ae}");
    }

    #[test]
    fn truncate_chars_counts_characters_not_bytes() {
        let (head, cut) = truncate_chars("héllo wörld", 5);
        assert_eq!(head, "héllo");
        assert!(cut);
    }

    #[test]
    fn truncate_chars_exact_length_is_not_truncated() {
        let (head, cut) = truncate_chars("abc", 3);
        assert_eq!(head, "abc");
        assert!(!cut);
    }

    #[test]
    fn resolve_href_joins_relative_and_keeps_absolute() {
        let base = Url::parse("https://shop.example.com/collections/all?page=2").unwrap();
        assert_eq!(
            resolve_href(&base, "/pages/returns").as_deref(),
            Some("https://shop.example.com/pages/returns")
        );
        assert_eq!(
            resolve_href(&base, "https://cdn.example.com/x").as_deref(),
            Some("https://cdn.example.com/x")
        );
    }
}
