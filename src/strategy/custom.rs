//! Custom-config strategy: operator selectors bypass classification.
//!
//! Containers are every match of the configured container selector; each
//! field resolves to the first match of its selector inside the container,
//! extracted per the declared mode. Unmatched fields become empty strings
//! so every record in the batch shares the configured field set.

use crate::config::{ExtractMode, ExtractionConfig};
use crate::dom::{self, Document, Selection};
use crate::normalize::collapse_whitespace;
use crate::record::Record;

pub(crate) fn extract(doc: &Document, config: &ExtractionConfig) -> Vec<Record> {
    dom::elements(&dom::query_all(doc, &config.container))
        .iter()
        .map(|container| {
            let mut record = Record::new();
            for rule in &config.fields {
                // Duplicate rule names keep the first rule: Record::push
                // refuses the second insert.
                record.push(rule.name.clone(), field_value(container, &rule.selector, &rule.mode));
            }
            record
        })
        .filter(|record| !record.is_empty())
        .collect()
}

fn field_value(container: &Selection, selector: &str, mode: &ExtractMode) -> String {
    let Some(el) = dom::select_first(container, selector) else {
        return String::new();
    };
    match mode {
        ExtractMode::Text => collapse_whitespace(&dom::text(&el)),
        ExtractMode::Attribute(name) => dom::attr(&el, name).unwrap_or_default(),
        ExtractMode::InnerHtml => dom::inner_html(&el).trim().to_string(),
    }
}
