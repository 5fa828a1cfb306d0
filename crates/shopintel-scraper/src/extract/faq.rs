use reqwest::Url;

use crate::client::PageFetcher;
use crate::document::{element_text, truncate_chars, Document};
use crate::extract::rules::{
    ELLIPSIS, FAQ_ANSWER, FAQ_ANSWER_MAX_CHARS, FAQ_CONTAINER, FAQ_LIMIT, FAQ_LINK_KEYWORD,
    FAQ_QUESTION,
};
use crate::types::FaqEntry;

/// First anchor whose text or `href` mentions FAQs, resolved against `base`.
///
/// Only that first anchor is considered: if its `href` cannot be joined there
/// is no FAQ link.
#[must_use]
pub fn find_faq_link(doc: &Document, base: &Url) -> Option<Url> {
    let anchor = doc.anchors().find(|anchor| {
        anchor.text_lower().contains(FAQ_LINK_KEYWORD)
            || anchor.href_lower().contains(FAQ_LINK_KEYWORD)
    })?;
    base.join(anchor.href).ok()
}

/// Question/answer pairs from expandable or accordion containers.
///
/// Answers are cut to [`FAQ_ANSWER_MAX_CHARS`] and always end with the
/// ellipsis, whether or not anything was cut.
#[must_use]
pub fn extract_faq_entries(doc: &Document) -> Vec<FaqEntry> {
    doc.select(&FAQ_CONTAINER)
        .take(FAQ_LIMIT)
        .filter_map(|container| {
            let question = container.select(&FAQ_QUESTION).next()?;
            let answer = container.select(&FAQ_ANSWER).next()?;
            let answer = element_text(answer);
            Some(FaqEntry {
                question: element_text(question),
                answer: format!(
                    "{}{ELLIPSIS}",
                    truncate_chars(&answer, FAQ_ANSWER_MAX_CHARS).0
                ),
            })
        })
        .collect()
}

/// Fetches the FAQ page and extracts its entries.
///
/// Never fails: a fetch error degrades to an empty list.
pub async fn fetch_faqs(fetcher: &PageFetcher, link: &Url) -> Vec<FaqEntry> {
    match fetcher.fetch_page(link).await {
        Ok(page) => {
            let faqs = parse_faq_page(&page.body);
            tracing::debug!(url = %link, count = faqs.len(), "extracted FAQ entries");
            faqs
        }
        Err(e) => {
            tracing::warn!(url = %link, error = %e, "FAQ page unavailable; returning no FAQs");
            Vec::new()
        }
    }
}

fn parse_faq_page(body: &str) -> Vec<FaqEntry> {
    let doc = Document::parse(body);
    extract_faq_entries(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.example.com/").unwrap()
    }

    #[test]
    fn finds_faq_link_by_text_or_href() {
        let by_text = Document::parse(
            r#"<html><body><a href="/pages/help">FAQ</a><a href="/pages/faq">Help</a></body></html>"#,
        );
        assert_eq!(
            find_faq_link(&by_text, &base()).map(String::from).as_deref(),
            Some("https://shop.example.com/pages/help")
        );

        let by_href = Document::parse(
            r#"<html><body><a href="/pages/FAQs">Questions</a></body></html>"#,
        );
        assert_eq!(
            find_faq_link(&by_href, &base()).map(String::from).as_deref(),
            Some("https://shop.example.com/pages/FAQs")
        );
    }

    #[test]
    fn unjoinable_first_faq_anchor_means_no_link() {
        let doc = Document::parse(
            r#"<html><body><a href="http://[faq">FAQ</a><a href="/pages/faq">FAQ</a></body></html>"#,
        );
        assert!(find_faq_link(&doc, &base()).is_none());
    }

    #[test]
    fn no_faq_link() {
        let doc = Document::parse(r#"<html><body><a href="/cart">Cart</a></body></html>"#);
        assert!(find_faq_link(&doc, &base()).is_none());
    }

    #[test]
    fn extracts_details_and_accordion_entries() {
        let doc = Document::parse(
            r#"<html><body>
                <details><summary> Do you ship? </summary><p>Yes, to 30 states.</p></details>
                <div class="accordion-item"><h3>Is it vegan?</h3><div class="content">All of it.</div></div>
                <div class="faq-item"><h4>Orphan question</h4></div>
            </body></html>"#,
        );
        let faqs = extract_faq_entries(&doc);
        assert_eq!(
            faqs,
            vec![
                FaqEntry {
                    question: "Do you ship?".to_string(),
                    answer: "Yes, to 30 states....".to_string(),
                },
                FaqEntry {
                    question: "Is it vegan?".to_string(),
                    answer: "All of it....".to_string(),
                },
            ]
        );
    }

    #[test]
    fn long_answers_are_cut_to_200_chars() {
        let answer = "a".repeat(450);
        let doc = Document::parse(&format!(
            "<html><body><details><summary>Q</summary><p>{answer}</p></details></body></html>"
        ));
        let faqs = extract_faq_entries(&doc);
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].answer, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn takes_first_five_containers_only() {
        let items: String = (1..=7)
            .map(|i| format!("<details><summary>Q{i}</summary><p>A{i}</p></details>"))
            .collect();
        let doc = Document::parse(&format!("<html><body>{items}</body></html>"));
        let faqs = extract_faq_entries(&doc);
        assert_eq!(faqs.len(), 5);
        assert_eq!(faqs[4].question, "Q5");
    }
}
