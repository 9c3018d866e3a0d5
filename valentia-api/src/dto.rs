//! Data transfer objects for the public API.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{ApiError, Result};
use valentia_core::{AnnotationRecord, CaseRole, LanguageTag, ValencyPattern, VerbHit};

/// Input source for analysis.
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (consumed on use)
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Analysis of one phrase span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhraseAnalysis {
    /// The trimmed span text
    pub text: String,
    /// Byte offset of the span in the source text
    pub offset: usize,
    /// Verb-lexicon hits within the span
    pub verbs: Vec<VerbHit>,
    /// Case roles whose heuristic fired, in canonical order
    pub roles: Vec<CaseRole>,
    /// Derived valency pattern
    pub pattern: ValencyPattern,
    /// Display label for `pattern`, e.g. `NOM-ACC-DAT`
    pub pattern_label: String,
}

/// Analysis metadata with runtime statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes analyzed
    pub total_bytes: usize,
    /// Total characters analyzed
    pub total_chars: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of phrase spans produced
    pub phrase_count: usize,
    /// Number of verb-lexicon hits across all spans
    pub verb_count: usize,
}

/// Complete analysis of one input.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Language the heuristics ran under
    pub language: LanguageTag,
    /// Whether `language` came from detection rather than configuration
    pub detected: bool,
    /// Per-span results in document order
    pub phrases: Vec<PhraseAnalysis>,
    /// Runtime statistics
    pub metadata: Metadata,
}

/// Aggregate counts for an export document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportStatistics {
    /// Phrase annotations
    pub phrases: usize,
    /// Verb annotations
    pub verbs: usize,
    /// Subject annotations
    pub subjects: usize,
    /// Object annotations
    pub objects: usize,
    /// Indirect-object annotations
    pub indirects: usize,
}

/// Export payload shaped for downstream JSON serialization.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportDocument {
    /// Language of the session, when one was configured or detected
    pub language: Option<LanguageTag>,
    /// Export time as Unix-epoch milliseconds
    pub exported_at_ms: u64,
    /// Every record in insertion order
    pub annotations: Vec<AnnotationRecord>,
    /// Aggregate counts
    pub statistics: ExportStatistics,
}

impl ExportDocument {
    /// Serialize the document to pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ApiError::Serde)
    }
}
