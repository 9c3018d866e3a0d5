//! Heuristic valency-pattern extraction for historical Greek and Latin text
//!
//! This crate implements a small linear pipeline over plain text: language
//! detection from script ranges and stopwords, phrase segmentation on
//! punctuation and per-language conjunction lists, and span-level
//! argument-role classification from closed verb lexicons and case-suffix
//! heuristics. Classified spans and user marks accumulate as immutable
//! records in an in-memory [`AnnotationStore`].
//!
//! The heuristics are intentionally shallow: suffix matching reports
//! span-level presence only and over-matches by design. That ceiling is
//! part of the contract, not a defect to engineer away. All operations are
//! total over their input text; the engine performs no I/O and holds no
//! shared mutable state beyond the store its caller owns.

#![warn(missing_docs)]

pub mod annotation;
pub mod classifier;
pub mod detector;
pub mod error;
pub mod language;
pub mod segmenter;
pub mod types;

// Re-export key types
pub use annotation::{AnnotationKind, AnnotationRecord, AnnotationRole, AnnotationStore};
pub use classifier::{classify, classify_with_profile, Classification, VerbHit};
pub use detector::{detect, detect_with_sample, SAMPLE_CHARS};
pub use error::{CoreError, Result};
pub use language::{profile, LanguageProfile};
pub use segmenter::{segment, Phrase, Phrases};
pub use types::{CaseRole, LanguageTag, ValencyPattern};
