//! Document Model Adapter.
//!
//! Thin wrappers over the `dom_query` crate providing the capability set the
//! engine needs: parsing, CSS querying, attribute/text access, and child
//! traversal. The rest of the crate goes through this module, so swapping
//! the parser backend touches one file.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

// Re-export StrTendril for zero-copy text passing
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Check whether a string compiles as a CSS selector.
///
/// Used to reject malformed operator configs before any fetch happens.
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    Matcher::new(selector).is_ok()
}

// === Querying ===

/// Query all elements below the document root by CSS selector.
#[inline]
#[must_use]
pub fn query_all<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector)
}

/// Query all descendants of a selection by CSS selector.
#[inline]
#[must_use]
pub fn select_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Query the first descendant matching the selector, if any.
#[must_use]
pub fn select_first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    found.exists().then_some(found)
}

/// Split a multi-element selection into one selection per element,
/// preserving document order.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// Direct element children of the first node in the selection.
#[must_use]
pub fn child_elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    elements(&sel.children())
}

// === Attributes and Text ===

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get an attribute value.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get the image source, falling back to the lazy-load attribute.
#[must_use]
pub fn src_attr(sel: &Selection) -> Option<String> {
    attr(sel, "src").or_else(|| attr(sel, "data-src"))
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Split the class attribute into its whitespace-separated tokens.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    attr(sel, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Get the next element sibling, skipping text nodes.
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

// === Document Properties ===

/// The document's `<base href>` value, if declared.
#[must_use]
pub fn base_href(doc: &Document) -> Option<String> {
    let base = doc.select("base[href]");
    base.exists().then(|| base.attr("href").map(|s| s.to_string())).flatten()
}
