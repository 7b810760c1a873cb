//! List strategy: one record per list item.
//!
//! Containers are the direct `<li>` children of qualifying lists; each
//! record carries the item text plus the first anchor target and image
//! source when present.

use crate::dom::{self, Document, Selection};
use crate::normalize::collapse_whitespace;
use crate::options::Options;
use crate::record::Record;

/// Lists with at least `min_list_items` direct `<li>` children, paired with
/// those children. Shared with the list detector so classification and
/// extraction agree on what qualifies.
pub(crate) fn qualifying_lists<'a>(
    doc: &'a Document,
    options: &Options,
) -> Vec<(Selection<'a>, Vec<Selection<'a>>)> {
    dom::elements(&dom::query_all(doc, "ul, ol"))
        .into_iter()
        .filter_map(|list| {
            let items: Vec<Selection> = dom::child_elements(&list)
                .into_iter()
                .filter(|child| dom::tag_name(child).as_deref() == Some("li"))
                .collect();
            (items.len() >= options.min_list_items).then_some((list, items))
        })
        .collect()
}

pub(crate) fn extract(doc: &Document, options: &Options) -> Vec<Record> {
    let mut records = Vec::new();

    for (_, items) in qualifying_lists(doc, options) {
        for item in items {
            let mut record = Record::new();
            let text = collapse_whitespace(&dom::text(&item));
            if !text.is_empty() {
                record.push("text", text);
            }
            record.push_opt("link", super::first_link(&item));
            record.push_opt("image", super::first_image(&item));

            if !record.is_empty() {
                records.push(record);
            }
        }
    }
    records
}
