//! Article strategy: a single record for the dominant content block.
//!
//! Fields resolve by role search inside the block; paragraph texts are
//! joined into one content field and image sources collect into a list.

use crate::dom::{self, Document, Selection};
use crate::normalize::collapse_whitespace;
use crate::options::Options;
use crate::patterns::ARTICLE_BLOCK_SELECTOR;
use crate::record::{FieldValue, Record};

/// The candidate block with the longest text run, shared with the article
/// detector. Returns the block and its trimmed character count.
pub(crate) fn dominant_block<'a>(doc: &'a Document) -> Option<(Selection<'a>, usize)> {
    let mut dominant: Option<(Selection, usize)> = None;
    for block in dom::elements(&dom::query_all(doc, ARTICLE_BLOCK_SELECTOR)) {
        let text_len = dom::text(&block).trim().chars().count();
        if dominant.as_ref().is_none_or(|(_, len)| text_len > *len) {
            dominant = Some((block, text_len));
        }
    }
    dominant
}

pub(crate) fn extract(doc: &Document, options: &Options) -> Vec<Record> {
    let Some((block, _)) = dominant_block(doc) else {
        return Vec::new();
    };

    let roles = &options.roles;
    let mut record = Record::new();
    record.push_opt("title", super::role_text(&block, &roles.title));
    record.push_opt("author", super::role_text(&block, &roles.author));
    record.push_opt("date", super::role_text(&block, &roles.date));

    let paragraphs: Vec<String> = dom::elements(&dom::select_all(&block, "p"))
        .iter()
        .map(|p| collapse_whitespace(&dom::text(p)))
        .filter(|text| !text.is_empty())
        .collect();
    if !paragraphs.is_empty() {
        let content = paragraphs.join("\n\n");
        let word_count = content.split_whitespace().count();
        record.push("content", content);
        record.push("word_count", FieldValue::Number(word_count as f64));
    }

    let mut images: Vec<String> = Vec::new();
    for img in dom::elements(&dom::select_all(&block, "img")) {
        if let Some(src) = dom::src_attr(&img) {
            if !src.is_empty() && !images.contains(&src) {
                images.push(src);
            }
        }
    }
    if !images.is_empty() {
        record.push("images", FieldValue::List(images));
    }

    if record.is_empty() {
        Vec::new()
    } else {
        vec![record]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_record_with_joined_content() {
        let doc = dom::parse(
            r#"<article>
                <h1>Headline</h1>
                <span class="author">Jo Writer</span>
                <time datetime="2024-03-01">March 1</time>
                <p>First paragraph.</p>
                <p>Second   paragraph.</p>
                <img src="/hero.png">
                <img src="/hero.png">
            </article>"#,
        );
        let records = extract(&doc, &Options::default());

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.get("title").unwrap().as_text(), Some("Headline"));
        assert_eq!(record.get("author").unwrap().as_text(), Some("Jo Writer"));
        assert_eq!(
            record.get("content").unwrap().as_text(),
            Some("First paragraph.\n\nSecond paragraph.")
        );
        assert_eq!(record.get("word_count"), Some(&FieldValue::Number(4.0)));
        // Duplicate image sources collapse.
        assert_eq!(record.get("images").unwrap().as_list(), Some(&["/hero.png".to_string()][..]));
    }

    #[test]
    fn dominant_block_prefers_longest_text() {
        let doc = dom::parse(
            r#"<div class="content"><p>short</p></div>
               <article><p>a much longer run of body text for the article</p></article>"#,
        );
        let (block, _) = dominant_block(&doc).unwrap();

        assert_eq!(dom::tag_name(&block).as_deref(), Some("article"));
    }

    #[test]
    fn page_without_candidate_blocks_is_empty() {
        let doc = dom::parse("<div><span>nothing here</span></div>");
        assert!(extract(&doc, &Options::default()).is_empty());
    }
}
