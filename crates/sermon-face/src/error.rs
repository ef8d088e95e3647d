//! Error types for face verification.

use thiserror::Error;

/// Result type for face verification operations.
pub type FaceResult<T> = Result<T, FaceError>;

/// Errors that can occur at the face verification boundary.
///
/// None of these reach the classification engine: callers translate any
/// error into an unverified observation before scoring.
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("No reference images available for comparison")]
    NoReferenceImages,

    #[error("No visual material on record: {0}")]
    NoVisualMaterial(String),

    #[error("Failed to fetch visual material: {message}")]
    FetchFailed { message: String },

    #[error("Failed to decode image data: {0}")]
    DecodeFailed(String),

    #[error("Recognition model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Verification timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FaceError {
    /// Create a fetch failure error.
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
