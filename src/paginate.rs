//! Pagination Controller.
//!
//! Walks a paginated sequence one page at a time: extract, merge, then
//! decide whether to request another document from the fetch collaborator.
//! The controller only ever follows an explicit locator or a detected
//! next-control element; it never guesses URLs. Pages are strictly
//! sequential because the next locator is unknown until the current page
//! is parsed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use crate::config::ExtractionConfig;
use crate::dom::{self, Document};
use crate::error::{FetchError, Result};
use crate::extract::{extract_page, resolve_base};
use crate::normalize::{absolutize, collapse_whitespace};
use crate::options::Options;
use crate::patterns::{
    NEXT_CONTROL_CLASS, NEXT_CONTROL_TEXT, PAGINATION_ANCHOR_SELECTOR, REL_NEXT_SELECTOR,
};
use crate::result::RunResult;

/// Anything the fetch collaborator can resolve into another document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextLocator {
    /// An absolute or page-relative URL, e.g. from a next link's href.
    Url(String),

    /// A CSS selector for a next control without an href; browser-backed
    /// fetchers can click it.
    Control(String),
}

/// Fetch collaborator contract.
///
/// Implementations own page-ready waiting and overlay dismissal; the engine
/// assumes the returned document is fully settled. Failures are surfaced,
/// never retried here.
pub trait Fetch {
    /// Resolve a locator into the next document.
    fn fetch(&mut self, locator: &NextLocator) -> std::result::Result<Document, FetchError>;
}

/// Cooperative cancellation handle.
///
/// Clone it, hand one side to the run, and flip it from anywhere; the
/// controller checks it before each fetch, so cancellation lands between
/// pages, never mid-extraction.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, unset token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation before the next fetch.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Why the walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The configured page ceiling was reached.
    CeilingReached,
    /// No next-page locator resolved on the last page.
    NoNextLocator,
    /// The last page contributed zero records and no continue-on-empty
    /// policy was in force.
    EmptyBatch,
    /// The caller cancelled between pages.
    Cancelled,
    /// The fetch collaborator failed; accumulated records were kept.
    FetchFailed(String),
}

/// Walk a paginated sequence starting from an already-fetched document.
///
/// The operator config, when present, is validated up front and drives both
/// extraction and the pagination policy. A mid-walk fetch failure stops the
/// walk but still returns the accumulated result, so partial progress is
/// never lost.
pub fn run<F: Fetch>(
    first: Document,
    fetcher: &mut F,
    config: Option<&ExtractionConfig>,
    options: &Options,
) -> Result<RunResult> {
    run_with_cancel(first, fetcher, config, options, &CancelToken::new())
}

/// Like [`run`], with a caller-owned cancellation token.
pub fn run_with_cancel<F: Fetch>(
    first: Document,
    fetcher: &mut F,
    config: Option<&ExtractionConfig>,
    options: &Options,
    cancel: &CancelToken,
) -> Result<RunResult> {
    if let Some(config) = config {
        config.validate()?;
    }
    // The ceiling is a hard invariant: never fetch past it, and always
    // process at least the document we were handed.
    let ceiling = config
        .and_then(|c| c.max_pages)
        .unwrap_or(options.max_pages)
        .max(1);
    let continue_on_empty =
        options.continue_on_empty || config.is_some_and(|c| c.continue_on_empty);

    let mut records = Vec::new();
    let mut category = None;
    let mut pages_visited = 0;
    let mut doc = first;

    let stop = loop {
        let page = extract_page(&doc, config, options);
        pages_visited += 1;
        let batch_len = page.records.len();
        if category.is_none() {
            category = page.classification.as_ref().map(|c| c.category);
        }
        records.extend(page.records);
        info!(page = pages_visited, records = batch_len, "page merged");

        if pages_visited >= ceiling {
            break StopReason::CeilingReached;
        }
        let Some(locator) = page.next else {
            break StopReason::NoNextLocator;
        };
        if batch_len == 0 && !continue_on_empty {
            break StopReason::EmptyBatch;
        }
        if cancel.is_cancelled() {
            break StopReason::Cancelled;
        }

        match fetcher.fetch(&locator) {
            Ok(next_doc) => doc = next_doc,
            Err(err) => {
                warn!(page = pages_visited + 1, error = %err, "fetch failed, keeping partial result");
                break StopReason::FetchFailed(err.0);
            }
        }
    };

    info!(pages = pages_visited, records = records.len(), stop = ?stop, "run finished");
    Ok(RunResult { records, pages_visited, category, stop })
}

/// Walk a paginated sequence starting from a URL.
///
/// The first fetch happens before any extraction, so a failure there is a
/// real error: there is no partial progress to preserve yet.
pub fn run_from_url<F: Fetch>(
    start: &str,
    fetcher: &mut F,
    config: Option<&ExtractionConfig>,
    options: &Options,
) -> Result<RunResult> {
    if let Some(config) = config {
        config.validate()?;
    }
    let first = fetcher.fetch(&NextLocator::Url(start.to_string()))?;
    run(first, fetcher, config, options)
}

/// Resolve the next-page locator for a document.
///
/// Priority: the operator's `next_selector`, then `rel=next` links, then
/// next-classed anchors, then pagination-container anchors with next-style
/// text. Hrefs are absolutized against the base; a matched control without
/// an href becomes a clickable-control locator.
pub(crate) fn find_next_locator(
    doc: &Document,
    config: Option<&ExtractionConfig>,
    base: Option<&Url>,
) -> Option<NextLocator> {
    if let Some(selector) = config.and_then(|c| c.next_selector.as_deref()) {
        let control = dom::query_all(doc, selector);
        if !control.exists() {
            return None;
        }
        return Some(match dom::attr(&control, "href") {
            Some(href) if !href.is_empty() => NextLocator::Url(resolve_href(&href, base)),
            _ => NextLocator::Control(selector.to_string()),
        });
    }

    // rel=next is the strongest page-supplied signal.
    for link in dom::elements(&dom::query_all(doc, REL_NEXT_SELECTOR)) {
        if let Some(href) = dom::attr(&link, "href").filter(|h| !h.is_empty()) {
            return Some(NextLocator::Url(resolve_href(&href, base)));
        }
    }

    // Anchors whose class marks them as the next control.
    for anchor in dom::elements(&dom::query_all(doc, "a[href]")) {
        let classes = dom::attr(&anchor, "class").unwrap_or_default();
        if NEXT_CONTROL_CLASS.is_match(&classes) {
            if let Some(href) = dom::attr(&anchor, "href").filter(|h| !h.is_empty()) {
                return Some(NextLocator::Url(resolve_href(&href, base)));
            }
        }
    }

    // Pagination-container anchors labelled like a next control.
    for anchor in dom::elements(&dom::query_all(doc, PAGINATION_ANCHOR_SELECTOR)) {
        let label = collapse_whitespace(&dom::text(&anchor));
        if NEXT_CONTROL_TEXT.is_match(&label) {
            if let Some(href) = dom::attr(&anchor, "href").filter(|h| !h.is_empty()) {
                return Some(NextLocator::Url(resolve_href(&href, base)));
            }
        }
    }

    None
}

fn resolve_href(href: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => absolutize(href, base),
        None => href.to_string(),
    }
}

/// Next locator for a standalone document, using the document's own base.
#[must_use]
pub fn detect_next(doc: &Document, options: &Options) -> Option<NextLocator> {
    let base = resolve_base(doc, options);
    find_next_locator(doc, None, base.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(html: &str) -> Option<NextLocator> {
        detect_next(&dom::parse(html), &Options::default())
    }

    #[test]
    fn rel_next_wins_over_labelled_anchors() {
        let html = r#"
            <a rel="next" href="/page/2">whatever</a>
            <div class="pagination"><a href="/page/9">Next</a></div>
        "#;
        assert_eq!(locate(html), Some(NextLocator::Url("/page/2".to_string())));
    }

    #[test]
    fn next_classed_anchor_is_detected() {
        let html = r#"<a class="btn btn-next" href="/p3">more</a>"#;
        assert_eq!(locate(html), Some(NextLocator::Url("/p3".to_string())));
    }

    #[test]
    fn pagination_container_anchor_needs_next_style_text() {
        let html = r#"<div class="pagination"><a href="/p1">1</a><a href="/p2">Next »</a></div>"#;
        assert_eq!(locate(html), Some(NextLocator::Url("/p2".to_string())));

        let no_next = r#"<div class="pagination"><a href="/p1">1</a><a href="/p2">2</a></div>"#;
        assert_eq!(locate(no_next), None);
    }

    #[test]
    fn hrefs_absolutize_against_document_base() {
        let html = r#"
            <head><base href="https://example.com/list/"></head>
            <body><a rel="next" href="?page=2">Next</a></body>
        "#;
        assert_eq!(
            locate(html),
            Some(NextLocator::Url("https://example.com/list/?page=2".to_string()))
        );
    }

    #[test]
    fn config_next_selector_overrides_detection() {
        let doc = dom::parse(
            r#"<a rel="next" href="/auto">auto</a><button class="load-more">Load more</button>"#,
        );
        let config: ExtractionConfig =
            serde_json::from_str(r#"{"container": ".x", "next_selector": ".load-more"}"#).unwrap();

        let locator = find_next_locator(&doc, Some(&config), None);
        assert_eq!(locator, Some(NextLocator::Control(".load-more".to_string())));
    }

    #[test]
    fn no_signals_means_no_locator() {
        assert_eq!(locate("<p>plain page</p>"), None);
    }

    #[test]
    fn cancel_token_flips_once() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.clone().cancel();
        assert!(token.is_cancelled());
    }
}
