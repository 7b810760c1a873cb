//! # rs-gleaner
//!
//! Structured record extraction from arbitrary HTML.
//!
//! Given a rendered page, this library decides what kind of content the
//! page holds (table, list, card grid, article, product listing, or none
//! of these), applies the matching extraction strategy, and returns a
//! uniform sequence of field/value records. Operator-supplied selector
//! configs bypass detection entirely, and a pagination controller can walk
//! a sequence of pages through a caller-provided fetcher, merging batches
//! into one result.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_gleaner::ContentCategory;
//!
//! let html = r#"<table>
//!     <tr><th>Name</th><th>Price</th></tr>
//!     <tr><td>Widget</td><td>$9.99</td></tr>
//!     <tr><td>Gadget</td><td>$14.99</td></tr>
//! </table>"#;
//!
//! let page = rs_gleaner::extract(html)?;
//! assert_eq!(page.category(), Some(ContentCategory::Table));
//! assert_eq!(page.records.len(), 2);
//! assert_eq!(page.records[0].get("Name").unwrap().as_text(), Some("Widget"));
//! # Ok::<(), rs_gleaner::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Structural classification**: per-category detectors score competing
//!   hypotheses from markup shape alone; no text semantics, fully
//!   deterministic.
//! - **Strategy registry**: one extraction strategy per category, plus a
//!   generic fallback that never fails.
//! - **Operator overrides**: container/field selector configs for precise
//!   extraction, validated before any fetch.
//! - **Normalization**: whitespace collapse and base-URL resolution with
//!   fixed-point (idempotent) rules.
//! - **Pagination**: sequential walk behind a `Fetch` trait, with a hard
//!   page ceiling, cooperative cancellation, and partial results on fetch
//!   failure.

mod config;
mod error;
mod extract;
mod normalize;
mod options;
mod patterns;
mod record;
mod result;
mod strategy;

/// DOM adapter over the `dom_query` backend.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Structural classification: detectors, ranking, tie-breaks.
pub mod classify;

/// Pagination controller and the fetch collaborator contract.
pub mod paginate;

// Public API - re-exports
pub use classify::{Classification, ContentCategory};
pub use config::{ExtractMode, ExtractionConfig, FieldRule};
pub use error::{Error, FetchError, Result};
pub use options::{FieldRoles, Options};
pub use paginate::{
    run, run_from_url, run_with_cancel, CancelToken, Fetch, NextLocator, StopReason,
};
pub use record::{FieldValue, Record};
pub use result::{PageResult, RunResult};

/// Extract records from one HTML document using default options.
///
/// Classification picks the strategy; the records are normalized against
/// the document's `<base href>` when present.
#[allow(clippy::missing_errors_doc)]
#[allow(clippy::unnecessary_wraps)]
pub fn extract(html: &str) -> Result<PageResult> {
    extract_with_options(html, &Options::default())
}

/// Extract records from one HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_gleaner::{extract_with_options, Options};
///
/// let html = r#"<ul><li><a href="/a">A</a></li><li><a href="/b">B</a></li>
///     <li><a href="/c">C</a></li></ul>"#;
/// let options = Options {
///     url: Some("https://example.com/index".to_string()),
///     ..Options::default()
/// };
///
/// let page = extract_with_options(html, &options)?;
/// assert_eq!(
///     page.records[0].get("link").unwrap().as_text(),
///     Some("https://example.com/a")
/// );
/// # Ok::<(), rs_gleaner::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
#[allow(clippy::unnecessary_wraps)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<PageResult> {
    Ok(extract::extract_page(&dom::parse(html), None, options))
}

/// Extract records with an operator config, bypassing classification.
///
/// The config is validated first; a malformed container or field selector
/// is rejected before the document is even parsed.
///
/// # Example
///
/// ```rust
/// use rs_gleaner::{extract_with_config, ExtractionConfig, Options};
///
/// let config: ExtractionConfig = serde_json::from_str(
///     r#"{"container": ".job", "fields": [{"name": "title", "selector": "h2"}]}"#,
/// )?;
/// let html = r#"<div class="job"><h2>Engineer</h2></div>"#;
///
/// let page = extract_with_config(html, &config, &Options::default())?;
/// assert!(page.classification.is_none());
/// assert_eq!(page.records[0].get("title").unwrap().as_text(), Some("Engineer"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_config(
    html: &str,
    config: &ExtractionConfig,
    options: &Options,
) -> Result<PageResult> {
    config.validate()?;
    Ok(extract::extract_page(&dom::parse(html), Some(config), options))
}

/// Extract records from HTML bytes with automatic encoding detection.
///
/// Detects the charset declared in the document head and transcodes to
/// UTF-8 before extraction; invalid sequences become U+FFFD rather than
/// errors.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<PageResult> {
    extract(&encoding::decode(html))
}

/// Extract records from HTML bytes with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<PageResult> {
    extract_with_options(&encoding::decode(html), options)
}

/// Classify an HTML document without extracting anything.
///
/// Returns every category's verdict ranked by confidence; see
/// [`classify::choose`] for the threshold fallback the extractors apply.
#[must_use]
pub fn classify_html(html: &str, options: &Options) -> Vec<Classification> {
    classify::classify(&dom::parse(html), options)
}
