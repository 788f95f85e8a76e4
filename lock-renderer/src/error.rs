//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while building frames.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Painter style contains unusable values.
    #[error("Invalid painter style: {0}")]
    InvalidStyle(String),

    /// Frame serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
