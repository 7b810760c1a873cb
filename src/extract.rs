//! Single-page extraction pipeline.
//!
//! Classify (unless an operator config bypasses it), run the selected
//! strategy, normalize the batch against the page base URL, and resolve
//! the next-page locator.

use tracing::debug;
use url::Url;

use crate::classify;
use crate::config::ExtractionConfig;
use crate::dom::{self, Document};
use crate::normalize;
use crate::options::Options;
use crate::paginate;
use crate::result::PageResult;
use crate::strategy;

/// Run the full pipeline on one document.
pub(crate) fn extract_page(
    doc: &Document,
    config: Option<&ExtractionConfig>,
    options: &Options,
) -> PageResult {
    let base = resolve_base(doc, options);

    let (classification, mut records) = match config {
        Some(config) => (None, strategy::custom::extract(doc, config)),
        None => {
            let ranked = classify::classify(doc, options);
            let chosen = classify::choose(&ranked, options);
            debug!(category = %chosen.category, confidence = chosen.confidence, "category selected");
            let records = strategy::extract_for_category(doc, chosen.category, options);
            (Some(chosen), records)
        }
    };

    normalize::normalize_records(&mut records, base.as_ref());
    let next = paginate::find_next_locator(doc, config, base.as_ref());

    PageResult { classification, records, next }
}

/// Base URL for link resolution: the document's `<base href>` wins, then
/// the operator-supplied source URL.
pub(crate) fn resolve_base(doc: &Document, options: &Options) -> Option<Url> {
    dom::base_href(doc)
        .or_else(|| options.url.clone())
        .and_then(|raw| Url::parse(&raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ContentCategory;

    #[test]
    fn config_presence_skips_classification() {
        // A page that would classify as Article, extracted card-style via
        // config: the result must follow the config, with no classification
        // recorded.
        let body = "Long article body text, repeated for weight. ".repeat(12);
        let doc = dom::parse(&format!(
            r#"<article><h1>Title</h1><p>{body}</p><div class="entry"><h2>Inner</h2></div></article>"#
        ));
        let config: ExtractionConfig = serde_json::from_str(
            r#"{"container": ".entry", "fields": [{"name": "title", "selector": "h2"}]}"#,
        )
        .unwrap();

        let page = extract_page(&doc, Some(&config), &Options::default());
        assert!(page.classification.is_none());
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].get("title").unwrap().as_text(), Some("Inner"));

        // Without the config the same document classifies as Article.
        let auto = extract_page(&doc, None, &Options::default());
        assert_eq!(auto.category(), Some(ContentCategory::Article));
    }

    #[test]
    fn options_url_is_the_fallback_base() {
        let doc = dom::parse("<p>no base tag</p>");
        let options = Options {
            url: Some("https://example.com/a/b".to_string()),
            ..Options::default()
        };

        let base = resolve_base(&doc, &options).unwrap();
        assert_eq!(base.as_str(), "https://example.com/a/b");
    }

    #[test]
    fn document_base_wins_over_options_url() {
        let doc = dom::parse(r#"<head><base href="https://docs.example.com/"></head>"#);
        let options = Options {
            url: Some("https://example.com/".to_string()),
            ..Options::default()
        };

        let base = resolve_base(&doc, &options).unwrap();
        assert_eq!(base.as_str(), "https://docs.example.com/");
    }
}
