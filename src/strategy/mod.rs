//! Extraction Strategy Registry.
//!
//! One strategy per content category. Each strategy enumerates containers
//! (one per output record) and maps sub-elements to field names; shared
//! role-search helpers implement the first-match-wins priority lookup used
//! by the card, product, and article strategies.

pub(crate) mod article;
pub(crate) mod cards;
pub(crate) mod custom;
pub(crate) mod generic;
pub(crate) mod list;
pub(crate) mod product;
pub(crate) mod table;

use crate::classify::ContentCategory;
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::record::Record;

/// Run the strategy registered for a category.
///
/// Zero containers on the page yields an empty batch; that is a legitimate
/// terminal state for the page, not an error.
pub(crate) fn extract_for_category(
    doc: &Document,
    category: ContentCategory,
    options: &Options,
) -> Vec<Record> {
    match category {
        ContentCategory::Table => table::extract(doc, options),
        ContentCategory::Product => product::extract(doc, options),
        ContentCategory::CardGrid => cards::extract(doc, options),
        ContentCategory::List => list::extract(doc, options),
        ContentCategory::Article => article::extract(doc, options),
        ContentCategory::Generic => generic::extract(doc, options),
    }
}

/// First element matching any selector in the role's priority list.
///
/// Selectors are tried in order; the first one with a match wins even when
/// a later selector would match an earlier element in document order.
pub(crate) fn find_role<'a>(
    container: &Selection<'a>,
    priorities: &[String],
) -> Option<Selection<'a>> {
    priorities.iter().find_map(|css| dom::select_first(container, css))
}

/// Trimmed text of the first role match.
///
/// Whitespace-only matches count as absent so the field stays unset rather
/// than becoming an empty string.
pub(crate) fn role_text(container: &Selection, priorities: &[String]) -> Option<String> {
    find_role(container, priorities)
        .map(|el| dom::text(&el).trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Target of the first anchor inside the container.
pub(crate) fn first_link(container: &Selection) -> Option<String> {
    dom::select_first(container, "a[href]")
        .and_then(|a| dom::attr(&a, "href"))
        .filter(|href| !href.is_empty())
}

/// Source of the first image inside the container, honoring lazy-load
/// attributes.
pub(crate) fn first_image(container: &Selection) -> Option<String> {
    dom::select_first(container, "img")
        .and_then(|img| dom::src_attr(&img))
        .filter(|src| !src.is_empty())
}
