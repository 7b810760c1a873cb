//! Structural Classifier.
//!
//! Runs one independent detector per content category and ranks the results
//! by confidence. Every signal is structural (element shapes, repetition,
//! class-token conventions) and deterministic for a given document; text
//! semantics are never inspected.
//!
//! Confidence is a normalized [0,1] measure of signal strength, not a
//! probability. Each detector combines a base score with weighted
//! regularity/repetition factors; the weights are named constants below so
//! they can be tuned and tested per detector. Container enumeration is
//! shared with the extraction strategies, so the structures that win
//! classification are the structures that get extracted.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::{BYLINE_SELECTOR, DATE_MARKER_SELECTOR};
use crate::strategy::{article, cards, list, product};

/// Content categories.
///
/// Declaration order is most-structurally-specific first and doubles as the
/// tie-break order: detectors are evaluated in this order and a stable sort
/// keeps the earlier category on exact confidence ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// Tabular data with a header row.
    Table,
    /// Repeated price-bearing containers.
    Product,
    /// Repeated class-sharing sibling cards.
    CardGrid,
    /// A substantial `<ul>`/`<ol>` of similar items.
    List,
    /// One dominant heading-plus-text block.
    Article,
    /// Fallback: headings, links, paragraph blocks.
    Generic,
}

impl ContentCategory {
    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Product => "product",
            Self::CardGrid => "card_grid",
            Self::List => "list",
            Self::Article => "article",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detector's verdict: a category, its confidence, and the selector or
/// pattern that justified the score.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Detected category.
    pub category: ContentCategory,
    /// Confidence in [0,1].
    pub confidence: f64,
    /// Selector/pattern evidence behind the score.
    pub evidence: String,
}

impl Classification {
    fn none(category: ContentCategory) -> Self {
        Self { category, confidence: 0.0, evidence: String::new() }
    }
}

// =============================================================================
// Scoring Constants
// =============================================================================
//
// Base scores put a category with minimal qualifying evidence well above
// the generic floor; the weighted factors reward regularity and repetition.
// Base plus both weights sums to 1.0 for tables and products, so a
// structurally perfect signal of either scores exactly 1.0.

/// Fixed confidence of the always-available generic fallback.
pub const GENERIC_CONFIDENCE: f64 = 0.1;

/// Base score once a detector's minimum structure is present.
pub(crate) const BASE_SCORE: f64 = 0.5;

/// Weight of the regularity factor (cell-count regularity, price match
/// rate, shape similarity/consistency).
pub(crate) const REGULARITY_WEIGHT: f64 = 0.35;

/// Weight of the repetition factor (row/item/sibling count).
pub(crate) const REPETITION_WEIGHT: f64 = 0.15;

/// Lists and card grids start lower than tables/products: repeated markup
/// without a stronger signal is often navigation chrome.
pub(crate) const WEAK_BASE_SCORE: f64 = 0.3;

/// Extra weight lists/cards can earn back through repetition.
pub(crate) const WEAK_REPETITION_WEIGHT: f64 = 0.2;

/// Bonus when a card group's class token follows card naming conventions.
pub(crate) const CARD_TOKEN_BONUS: f64 = 0.15;

/// Bonus per article marker (byline, date, semantic `<article>` tag).
pub(crate) const ARTICLE_MARKER_BONUS: f64 = 0.15;

/// Repetition saturates: past this many containers, more repeats stop
/// raising confidence.
pub(crate) const REPETITION_SATURATION: usize = 12;

/// Repetition count mapped onto [0,1] with saturation.
pub(crate) fn repetition_factor(count: usize) -> f64 {
    count.min(REPETITION_SATURATION) as f64 / REPETITION_SATURATION as f64
}

/// Share of observations equal to the modal value; 0.0 for no observations.
pub(crate) fn modal_share<T: Ord>(observations: &[T]) -> f64 {
    if observations.is_empty() {
        return 0.0;
    }
    let mut counts: BTreeMap<&T, usize> = BTreeMap::new();
    for obs in observations {
        *counts.entry(obs).or_default() += 1;
    }
    let modal = counts.values().copied().max().unwrap_or(0);
    modal as f64 / observations.len() as f64
}

// =============================================================================
// Classification
// =============================================================================

/// Classify a document: every category's verdict, ranked by confidence
/// descending with ties resolved to the more specific category.
///
/// Deterministic: the same document always yields the same ranking.
#[must_use]
pub fn classify(doc: &Document, options: &Options) -> Vec<Classification> {
    // Evaluation order = tie-break order; the sort below is stable.
    let mut ranked = vec![
        detect_table(doc, options),
        detect_product(doc, options),
        detect_card_grid(doc, options),
        detect_list(doc, options),
        detect_article(doc, options),
        Classification {
            category: ContentCategory::Generic,
            confidence: GENERIC_CONFIDENCE,
            evidence: "h1-h6, a[href], p".to_string(),
        },
    ];
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    for c in &ranked {
        debug!(category = %c.category, confidence = c.confidence, evidence = %c.evidence, "detector score");
    }
    ranked
}

/// Resolve a ranking to the category extraction will use: the top entry, or
/// Generic when the top confidence is below `Options::min_confidence`.
///
/// Sub-threshold ambiguity is self-healing, never an error.
#[must_use]
pub fn choose(ranked: &[Classification], options: &Options) -> Classification {
    match ranked.first() {
        Some(top) if top.confidence >= options.min_confidence => top.clone(),
        _ => Classification {
            category: ContentCategory::Generic,
            confidence: GENERIC_CONFIDENCE,
            evidence: "below confidence threshold".to_string(),
        },
    }
}

// =============================================================================
// Detectors
// =============================================================================

/// Tables qualify with a header row plus at least `min_table_rows` data
/// rows; confidence scales with cell-count regularity and row count.
fn detect_table(doc: &Document, options: &Options) -> Classification {
    let mut best = Classification::none(ContentCategory::Table);

    for table in dom::elements(&dom::query_all(doc, "table")) {
        let rows = dom::elements(&dom::select_all(&table, "tr"));
        if rows.len() < options.min_table_rows + 1 {
            continue;
        }

        let cell_counts: Vec<usize> = rows
            .iter()
            .map(|row| dom::select_all(row, "th, td").length())
            .collect();
        let regularity = modal_share(&cell_counts);
        let data_rows = rows.len() - 1;

        let confidence = (BASE_SCORE
            + REGULARITY_WEIGHT * regularity
            + REPETITION_WEIGHT * repetition_factor(data_rows))
        .min(1.0);

        if confidence > best.confidence {
            best.confidence = confidence;
            best.evidence = format!("table ({data_rows} data rows)");
        }
    }
    best
}

/// Products are repeated containers with conventional class tokens, each
/// holding a price-like token and a title-like element.
fn detect_product(doc: &Document, options: &Options) -> Classification {
    let scan = product::scan(doc, options);
    if scan.containers.is_empty() || scan.qualified < options.min_product_containers {
        return Classification::none(ContentCategory::Product);
    }

    let price_rate = scan.priced as f64 / scan.containers.len() as f64;
    let confidence = (BASE_SCORE
        + REGULARITY_WEIGHT * price_rate
        + REPETITION_WEIGHT * repetition_factor(scan.qualified))
    .min(1.0);

    Classification {
        category: ContentCategory::Product,
        confidence,
        evidence: format!("[class*='product'] ({} priced containers)", scan.qualified),
    }
}

/// Card grids are sibling runs sharing a class token with a consistent
/// image/heading shape. The group search lives in the card strategy.
fn detect_card_grid(doc: &Document, options: &Options) -> Classification {
    match cards::best_group(doc, options) {
        Some((group, confidence)) => Classification {
            category: ContentCategory::CardGrid,
            confidence,
            evidence: format!(".{} ({} siblings)", group.token, group.members.len()),
        },
        None => Classification::none(ContentCategory::CardGrid),
    }
}

/// Lists qualify with at least `min_list_items` direct items of mutually
/// similar subtree shape.
fn detect_list(doc: &Document, options: &Options) -> Classification {
    let mut best = Classification::none(ContentCategory::List);

    for (list, items) in list::qualifying_lists(doc, options) {
        let shapes: Vec<String> = items.iter().map(shape_signature).collect();
        let similarity = modal_share(&shapes);
        let confidence = (WEAK_BASE_SCORE
            + REGULARITY_WEIGHT * similarity
            + WEAK_REPETITION_WEIGHT * repetition_factor(items.len()))
        .min(1.0);

        if confidence > best.confidence {
            best.confidence = confidence;
            let tag = dom::tag_name(&list).unwrap_or_else(|| "ul".to_string());
            best.evidence = format!("{tag} ({} items)", items.len());
        }
    }
    best
}

/// Tag composition of an element's subtree, order-insensitive, used to
/// compare sibling shapes.
fn shape_signature(el: &Selection) -> String {
    let mut tags: Vec<String> = dom::elements(&dom::select_all(el, "*"))
        .iter()
        .filter_map(dom::tag_name)
        .collect();
    tags.sort_unstable();
    tags.join(",")
}

/// Articles are a single dominant block holding a heading and a substantial
/// text run; byline/date/semantic-tag markers raise confidence.
fn detect_article(doc: &Document, options: &Options) -> Classification {
    let Some((block, text_len)) = article::dominant_block(doc) else {
        return Classification::none(ContentCategory::Article);
    };
    if text_len < options.min_article_text_len || dom::select_first(&block, "h1, h2").is_none() {
        return Classification::none(ContentCategory::Article);
    }

    let mut confidence = BASE_SCORE;
    let mut markers = Vec::new();
    if dom::select_first(&block, BYLINE_SELECTOR).is_some() {
        confidence += ARTICLE_MARKER_BONUS;
        markers.push("byline");
    }
    if dom::select_first(&block, DATE_MARKER_SELECTOR).is_some() {
        confidence += ARTICLE_MARKER_BONUS;
        markers.push("date");
    }
    if dom::tag_name(&block).as_deref() == Some("article") {
        confidence += ARTICLE_MARKER_BONUS;
        markers.push("article tag");
    }

    Classification {
        category: ContentCategory::Article,
        confidence: confidence.min(1.0),
        evidence: format!("dominant block, {text_len} chars [{}]", markers.join(", ")),
    }
}
