//! Engine error types.
//!
//! The engine proper is total over valid inputs; errors arise only at the
//! boundary, when a language table fails to load or an annotation record
//! is created with empty text.

use crate::types::LanguageTag;
use thiserror::Error;

/// Core engine errors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An embedded language table failed to parse
    #[error("failed to parse {language} table: {source}")]
    TableParse {
        /// Language code of the offending table
        language: String,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A language table failed structural validation
    #[error("invalid {language} table: {reason}")]
    InvalidTable {
        /// Language code of the offending table
        language: String,
        /// What the validator rejected
        reason: String,
    },

    /// A table pattern failed to compile
    #[error("invalid pattern in {language} table: {source}")]
    InvalidPattern {
        /// Language code of the offending table
        language: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The table for a supported language did not load
    #[error("language table for {0} is unavailable")]
    LanguageUnavailable(LanguageTag),

    /// Annotation text was empty after trimming
    #[error("annotation text is empty")]
    EmptyAnnotation,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
