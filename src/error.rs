//! Error types for compact_trie

use thiserror::Error;

/// Result type alias for compact_trie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in compact_trie operations
#[derive(Error, Debug)]
pub enum Error {
    /// A suffix could not be grafted onto a child because their leading
    /// symbols differ. Insertion consumes this and tries the next sibling.
    #[error("Merge mismatch: leading symbols differ")]
    MergeMismatch,

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
