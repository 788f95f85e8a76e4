//! Error types for pattern lock operations.

use thiserror::Error;

/// Result type for pattern lock operations.
pub type LockResult<T> = Result<T, LockError>;

/// Errors that can occur in pattern lock operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Configuration value is unusable (non-finite, etc.).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Cell index outside the 0..=8 grid range.
    #[error("Cell index out of range: {0}")]
    CellOutOfRange(usize),

    /// Snapshot/config serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
