//! Error types for the core library.

use thiserror::Error;

/// Main error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Progressive mode was requested with a zero segment size.
    #[error("Invalid segment size: {0}. Progressive mode requires a size of at least 1")]
    InvalidSegmentSize(usize),

    /// A segment index outside the block was referenced.
    #[error("Unknown segment index {index} (block has {total} segments)")]
    UnknownSegment { index: usize, total: usize },

    /// A serialized block payload does not describe a consistent block.
    #[error("Invalid block payload: {0}")]
    InvalidPayload(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
