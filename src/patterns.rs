//! Compiled regex patterns and CSS selectors used by the detectors.
//!
//! All patterns are compiled once at startup using `LazyLock`. Detection is
//! purely structural: these patterns match markup shapes and class-name
//! conventions, never text semantics.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Value Patterns
// =============================================================================

/// Matches a price-like token: a currency symbol next to a number, or a
/// number followed by an ISO currency code. The engine never converts these
/// to typed numbers; the pattern only drives product detection and lets
/// consumers rely on matched values being parseable.
pub static PRICE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[$€£¥₹]\s?\d{1,3}(?:[ ,.]\d{3})*(?:[.,]\d{1,2})?)|(?:\d{1,3}(?:[ ,.]\d{3})*(?:[.,]\d{1,2})?\s?(?:USD|EUR|GBP|JPY|kr)\b)")
        .expect("PRICE_TOKEN regex")
});

/// Matches internal whitespace runs for collapse during normalization.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

// =============================================================================
// Class-Name Conventions
// =============================================================================

/// Matches class tokens conventionally used for card containers.
pub static CARD_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(card|tile|grid[-_]?item|cell|box)\b").expect("CARD_CLASS regex")
});

/// Matches class tokens conventionally used for product containers.
pub static PRODUCT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(product|item|listing|offer)\b").expect("PRODUCT_CLASS regex")
});

/// Matches class/id tokens marking a next-page control.
pub static NEXT_CONTROL_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[-_\s])next([-_\s]|$)|pagination[-_]?next").expect("NEXT_CONTROL_CLASS regex")
});

/// Matches anchor text used by next-page controls ("Next", "Next »", "›").
/// Arrow glyphs count as structure here, not semantics: they are fixed
/// pagination markers, not free text.
pub static NEXT_CONTROL_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(next|more|older)(\s*(page|posts|»|›|>))?$|^(»|›|>|→)$").expect("NEXT_CONTROL_TEXT regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for the dominant article block, most specific first.
pub const ARTICLE_BLOCK_SELECTOR: &str =
    "article, [role='article'], [class*='article'], [class*='post-body'], [class*='content'], main";

/// Selector for byline markers inside an article block.
pub const BYLINE_SELECTOR: &str =
    "[rel='author'], .author, .byline, [class*='author'], [itemprop='author']";

/// Selector for date markers inside an article block.
pub const DATE_MARKER_SELECTOR: &str =
    "time, [datetime], .date, [class*='date'], [itemprop='datePublished']";

/// Selector for explicit rel=next pagination links.
pub const REL_NEXT_SELECTOR: &str = "a[rel~='next'], link[rel~='next']";

/// Selector for anchors inside a pagination container.
pub const PAGINATION_ANCHOR_SELECTOR: &str =
    "[class*='pagination'] a[href], [class*='pager'] a[href], nav[aria-label*='agination'] a[href]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_token_matches_symbol_and_code_forms() {
        assert!(PRICE_TOKEN.is_match("$19.99"));
        assert!(PRICE_TOKEN.is_match("€ 1.299,00"));
        assert!(PRICE_TOKEN.is_match("249 USD"));
        assert!(!PRICE_TOKEN.is_match("free shipping"));
    }

    #[test]
    fn price_token_rejects_bare_numbers() {
        assert!(!PRICE_TOKEN.is_match("42"));
        assert!(!PRICE_TOKEN.is_match("version 2.0"));
    }

    #[test]
    fn card_class_matches_token_boundaries() {
        assert!(CARD_CLASS.is_match("product-card"));
        assert!(CARD_CLASS.is_match("grid-item"));
        assert!(!CARD_CLASS.is_match("cardinal"));
    }

    #[test]
    fn next_control_text_matches_common_labels() {
        assert!(NEXT_CONTROL_TEXT.is_match("Next"));
        assert!(NEXT_CONTROL_TEXT.is_match("next page"));
        assert!(NEXT_CONTROL_TEXT.is_match("»"));
        assert!(!NEXT_CONTROL_TEXT.is_match("What happens next in the story"));
    }

    #[test]
    fn next_control_class_requires_token_position() {
        assert!(NEXT_CONTROL_CLASS.is_match("next"));
        assert!(NEXT_CONTROL_CLASS.is_match("pagination-next"));
        assert!(NEXT_CONTROL_CLASS.is_match("btn-next"));
        assert!(!NEXT_CONTROL_CLASS.is_match("nextdoor-widget"));
    }
}
