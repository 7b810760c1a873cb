//! Table strategy: one record per data row.
//!
//! Field names come from the header row; blank or missing headers fall back
//! to positional `Column_N` names. Rows whose cell count disagrees with the
//! header are truncated to the shorter length, marked partial, and still
//! emitted.

use crate::dom::{self, Document, Selection};
use crate::normalize::collapse_whitespace;
use crate::options::Options;
use crate::record::Record;

pub(crate) fn extract(doc: &Document, _options: &Options) -> Vec<Record> {
    let mut records = Vec::new();

    for table in dom::elements(&dom::query_all(doc, "table")) {
        let rows = dom::elements(&dom::select_all(&table, "tr"));
        // Need a header row plus at least one data row.
        if rows.len() < 2 {
            continue;
        }

        let headers = header_names(&rows[0]);
        if headers.is_empty() {
            continue;
        }

        for row in &rows[1..] {
            let cells = dom::elements(&dom::select_all(row, "th, td"));
            if cells.is_empty() {
                continue;
            }

            let mut record = Record::new();
            for (name, cell) in headers.iter().zip(cells.iter()) {
                record.push(name.clone(), collapse_whitespace(&dom::text(cell)));
            }
            if cells.len() != headers.len() {
                record.mark_partial();
            }
            records.push(record);
        }
    }
    records
}

/// Header cell texts from the first row. Blank cells get positional names
/// so every column stays addressable.
fn header_names(header_row: &Selection) -> Vec<String> {
    dom::elements(&dom::select_all(header_row, "th, td"))
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let text = collapse_whitespace(&dom::text(cell));
            if text.is_empty() {
                format!("Column_{}", idx + 1)
            } else {
                text
            }
        })
        .collect()
}
