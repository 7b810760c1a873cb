//! Operator-supplied selector configuration.
//!
//! When a config is present the structural classifier is skipped entirely:
//! the operator has told us exactly where the records live. Configs are
//! validated up front, before any fetch, so a malformed selector never
//! costs a page load.

use serde::Deserialize;

use crate::dom;
use crate::error::{Error, Result};

/// How to pull a value out of a matched element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    /// The element's text content.
    #[default]
    Text,

    /// A named attribute, e.g. `{"attribute": "href"}`.
    Attribute(String),

    /// The element's inner HTML, for nested markup.
    InnerHtml,
}

/// One output field: a name, a selector resolved within each container
/// match, and an extraction mode.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldRule {
    /// Output field name.
    pub name: String,

    /// CSS selector, relative to the container.
    pub selector: String,

    /// Extraction mode; text when omitted.
    #[serde(default)]
    pub mode: ExtractMode,
}

/// Operator-provided extraction config.
///
/// # Example (JSON)
///
/// ```json
/// {
///   "container": ".job-posting",
///   "fields": [
///     {"name": "title", "selector": "h2"},
///     {"name": "url", "selector": "a", "mode": {"attribute": "href"}}
///   ],
///   "max_pages": 3
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Selector matching one element per record. Required; field selectors
    /// resolve relative to each container match, never the document root.
    pub container: String,

    /// Output fields, in output order. Duplicate names keep the first rule.
    #[serde(default)]
    pub fields: Vec<FieldRule>,

    /// Selector for the next-page control, overriding auto-detection.
    #[serde(default)]
    pub next_selector: Option<String>,

    /// Per-run page ceiling, overriding `Options::max_pages`.
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// Keep paginating while a next locator resolves, even after a page
    /// contributed zero records.
    #[serde(default)]
    pub continue_on_empty: bool,
}

impl ExtractionConfig {
    /// Validate the config before any fetch occurs.
    ///
    /// Rejects a missing/blank container, a field set with blank names, and
    /// any selector string that does not compile. Zero *matches* at runtime
    /// is fine; an unparseable selector is not.
    pub fn validate(&self) -> Result<()> {
        if self.container.trim().is_empty() {
            return Err(Error::InvalidConfig("`container` is required".to_string()));
        }
        if !dom::is_valid_selector(&self.container) {
            return Err(Error::InvalidConfig(format!(
                "container selector does not parse: {:?}",
                self.container
            )));
        }
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "field with selector {:?} has an empty name",
                    field.selector
                )));
            }
            if !dom::is_valid_selector(&field.selector) {
                return Err(Error::InvalidConfig(format!(
                    "selector for field {:?} does not parse: {:?}",
                    field.name, field.selector
                )));
            }
        }
        if let Some(next) = &self.next_selector {
            if !dom::is_valid_selector(next) {
                return Err(Error::InvalidConfig(format!(
                    "next_selector does not parse: {next:?}"
                )));
            }
        }
        Ok(())
    }
}
