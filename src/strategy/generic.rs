//! Generic fallback strategy.
//!
//! Enumerates headings (with their following block), substantial
//! paragraphs, and de-duplicated links. Record key sets vary per record
//! here; consumers must not assume a shared shape.

use crate::dom::{self, Document};
use crate::normalize::collapse_whitespace;
use crate::options::Options;
use crate::record::Record;

/// Anchor text shorter than this is iconography, not a link worth a record.
const MIN_LINK_TEXT_LEN: usize = 3;

pub(crate) fn extract(doc: &Document, options: &Options) -> Vec<Record> {
    let mut records = Vec::new();

    for heading in dom::elements(&dom::query_all(doc, "h1, h2, h3, h4, h5, h6")) {
        let text = collapse_whitespace(&dom::text(&heading));
        if text.is_empty() {
            continue;
        }
        let mut record = Record::new();
        record.push("kind", dom::tag_name(&heading).unwrap_or_else(|| "heading".to_string()));
        record.push("text", text);
        let following = dom::next_element_sibling(&heading)
            .map(|sibling| collapse_whitespace(&dom::text(&sibling)))
            .filter(|content| !content.is_empty());
        record.push_opt("content", following);
        records.push(record);
    }

    for paragraph in dom::elements(&dom::query_all(doc, "p")) {
        let text = collapse_whitespace(&dom::text(&paragraph));
        if text.chars().count() < options.min_paragraph_len {
            continue;
        }
        let mut record = Record::new();
        record.push("kind", "paragraph");
        record.push("text", text);
        records.push(record);
    }

    let mut seen_hrefs: Vec<String> = Vec::new();
    for anchor in dom::elements(&dom::query_all(doc, "a[href]")) {
        let Some(href) = dom::attr(&anchor, "href").filter(|h| !h.is_empty()) else {
            continue;
        };
        let text = collapse_whitespace(&dom::text(&anchor));
        if text.chars().count() < MIN_LINK_TEXT_LEN || seen_hrefs.contains(&href) {
            continue;
        }
        seen_hrefs.push(href.clone());
        let mut record = Record::new();
        record.push("kind", "link");
        record.push("text", text);
        record.push("href", href);
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_headings_paragraphs_and_links() {
        let body = "A paragraph long enough to clear the minimum length threshold for generic extraction.";
        let doc = dom::parse(&format!(
            r#"<h2>Section</h2><p>{body}</p>
               <a href="/x">Read more</a>
               <a href="/x">Read more again</a>
               <a href="/y">ok</a>"#
        ));
        let records = extract(&doc, &Options::default());

        let kinds: Vec<&str> = records
            .iter()
            .filter_map(|r| r.get("kind").and_then(|v| v.as_text()))
            .collect();
        // One heading, one paragraph, one link: the duplicate href and the
        // two-char anchor are both dropped.
        assert_eq!(kinds, vec!["h2", "paragraph", "link"]);
        assert_eq!(records[0].get("content").unwrap().as_text(), Some(body));
    }

    #[test]
    fn empty_body_yields_no_records() {
        let doc = dom::parse("<html><body></body></html>");
        assert!(extract(&doc, &Options::default()).is_empty());
    }

    #[test]
    fn record_shapes_may_differ() {
        let doc = dom::parse("<h3>Bare heading</h3>");
        let records = extract(&doc, &Options::default());

        assert_eq!(records.len(), 1);
        assert!(records[0].get("content").is_none());
    }
}
