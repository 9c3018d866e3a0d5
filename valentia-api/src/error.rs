//! API error types.

use std::string::FromUtf8Error;
use thiserror::Error;
use valentia_core::CoreError;

/// API-level errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unsupported language code
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that is not supported
        code: String,
    },

    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason why the input is invalid
        reason: String,
    },

    /// Engine-layer error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
