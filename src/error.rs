//! Error types for rs-gleaner.
//!
//! The engine has exactly two externally visible failure modes: a rejected
//! operator config and a propagated fetch failure. Everything else
//! (ambiguous classification, empty extraction) is self-healing and never
//! surfaces as an error.

/// Failure reported by the fetch collaborator.
///
/// Carries an opaque reason string; the engine never retries and never
/// inspects it beyond logging.
#[derive(Debug, Clone, thiserror::Error)]
#[error("fetch failed: {0}")]
pub struct FetchError(pub String);

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Operator-supplied selector config was rejected before any fetch.
    #[error("invalid extraction config: {0}")]
    InvalidConfig(String),

    /// The fetch collaborator failed before any page could be processed.
    ///
    /// Mid-walk fetch failures are not errors; they terminate pagination
    /// with the accumulated records intact (see `StopReason::FetchFailed`).
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
