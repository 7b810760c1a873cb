//! Result types for extraction output.
//!
//! `PageResult` is one document's outcome; `RunResult` is the terminal
//! artifact of a pagination walk, handed to the output-writer collaborator.

use crate::classify::{Classification, ContentCategory};
use crate::paginate::{NextLocator, StopReason};
use crate::record::Record;

/// One document's classification outcome and extracted records.
#[derive(Debug, Clone)]
pub struct PageResult {
    /// The classification that drove extraction; `None` when an operator
    /// config bypassed the classifier.
    pub classification: Option<Classification>,

    /// Extracted records, in document order. May legitimately be empty.
    pub records: Vec<Record>,

    /// Next-page locator, when one resolved.
    pub next: Option<NextLocator>,
}

impl PageResult {
    /// Category that drove extraction, when classification ran.
    #[must_use]
    pub fn category(&self) -> Option<ContentCategory> {
        self.classification.as_ref().map(|c| c.category)
    }
}

/// The concatenated outcome of a pagination walk.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Records from every visited page, in visit order.
    pub records: Vec<Record>,

    /// Documents processed, never more than the configured ceiling.
    pub pages_visited: usize,

    /// Category of the first page's classification; `None` under an
    /// operator config.
    pub category: Option<ContentCategory>,

    /// Why the walk ended.
    pub stop: StopReason,
}
