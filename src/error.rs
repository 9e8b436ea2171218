//! Error types for the undom library.

use thiserror::Error;

/// Result type alias for undom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing a transient tree.
///
/// The pipeline itself is total: `translate`, `hoist` and `collapse_tree`
/// never fail on well-formed input trees. Errors only surface through the
/// opt-in guards configured via [`PipelineOptions`](crate::PipelineOptions).
#[derive(Error, Debug)]
pub enum Error {
    /// The input document tree is nested deeper than the configured limit.
    #[error("Document nesting depth {depth} exceeds the limit of {limit}")]
    DepthExceeded {
        /// Measured nesting depth of the input tree.
        depth: usize,
        /// The configured maximum depth.
        limit: usize,
    },

    /// A structural containment invariant does not hold on the tree.
    ///
    /// Raised only by [`validate`](crate::validate::validate); indicates a
    /// programming error in a pass rather than bad input.
    #[error("Structural invariant violation: {0}")]
    InvariantViolation(String),

    /// Error serializing a tree to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
