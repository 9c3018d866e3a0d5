//! Public API for Valentia valency-pattern extraction
//!
//! This crate wraps the `valentia-core` pipeline in a session-oriented
//! interface: one [`AnnotationSession`] per document, holding one
//! annotation store and one configuration. Analysis is read-only;
//! annotation additionally records phrase and verb marks the way a manual
//! annotator would, so downstream export sees one uniform record list.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

// Re-export key types
pub use config::{SessionConfig, SessionConfigBuilder};
pub use dto::{Analysis, ExportDocument, ExportStatistics, Input, Metadata, PhraseAnalysis};
pub use error::{ApiError, Result};
pub use valentia_core::{
    AnnotationKind, AnnotationRecord, AnnotationRole, AnnotationStore, CaseRole, LanguageTag,
    ValencyPattern, VerbHit,
};

use valentia_core::{classify_with_profile, detect_with_sample, language, CoreError, Phrases};

/// A single-document annotation workflow: one store, one configuration.
#[derive(Debug, Default)]
pub struct AnnotationSession {
    config: SessionConfig,
    store: AnnotationStore,
    /// Language of the most recent annotate call, for export.
    last_language: Option<LanguageTag>,
}

impl AnnotationSession {
    /// Create a session with default configuration (detect per input).
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with a fixed language.
    pub fn with_language(code: &str) -> Result<Self> {
        Ok(Self::with_config(
            SessionConfig::builder().language(code)?.build()?,
        ))
    }

    /// Create a session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            store: AnnotationStore::new(),
            last_language: None,
        }
    }

    /// Analyze input without touching the store.
    pub fn analyze(&self, input: Input) -> Result<Analysis> {
        let text = input.read_text()?;
        let (language, detected) = self.resolve_language(&text);
        run_pipeline(&text, language, detected)
    }

    /// Analyze input and record annotations per the configuration.
    ///
    /// Appends one `Phrase` record per span and one `Verb` role record
    /// per verb hit, subject to the session's toggles.
    pub fn annotate(&mut self, input: Input) -> Result<Analysis> {
        let text = input.read_text()?;
        let (language, detected) = self.resolve_language(&text);
        let analysis = run_pipeline(&text, language, detected)?;
        self.last_language = Some(language);

        for phrase in &analysis.phrases {
            if self.config.record_phrases {
                self.store.append(AnnotationKind::Phrase, &phrase.text)?;
            }
            if self.config.record_verbs {
                for verb in &phrase.verbs {
                    self.store
                        .append(AnnotationKind::ValencyRole(AnnotationRole::Verb), &verb.text)?;
                }
            }
        }

        Ok(analysis)
    }

    /// Record a manual phrase annotation.
    pub fn mark_phrase(&mut self, text: &str) -> Result<&AnnotationRecord> {
        append_mark(&mut self.store, AnnotationKind::Phrase, text)
    }

    /// Record a manual valency-role annotation.
    pub fn mark_role(&mut self, role: AnnotationRole, text: &str) -> Result<&AnnotationRecord> {
        append_mark(&mut self.store, AnnotationKind::ValencyRole(role), text)
    }

    /// The session's annotation store.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Drop every annotation.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Build the export payload for the current store contents.
    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            language: self.config.language().or(self.last_language),
            exported_at_ms: epoch_ms(),
            annotations: self.store.all().to_vec(),
            statistics: ExportStatistics {
                phrases: self.store.phrase_count(),
                verbs: self.store.role_count(AnnotationRole::Verb),
                subjects: self.store.role_count(AnnotationRole::Subject),
                objects: self.store.role_count(AnnotationRole::Object),
                indirects: self.store.role_count(AnnotationRole::Indirect),
            },
        }
    }

    fn resolve_language(&self, text: &str) -> (LanguageTag, bool) {
        match self.config.language() {
            Some(tag) => (tag, false),
            None => (detect_with_sample(text, self.config.sample_chars()), true),
        }
    }
}

fn append_mark<'a>(
    store: &'a mut AnnotationStore,
    kind: AnnotationKind,
    text: &str,
) -> Result<&'a AnnotationRecord> {
    store.append(kind, text).map_err(|error| match error {
        CoreError::EmptyAnnotation => ApiError::InvalidInput {
            reason: "annotation text is empty".to_string(),
        },
        other => ApiError::Core(other),
    })
}

fn run_pipeline(text: &str, language: LanguageTag, detected: bool) -> Result<Analysis> {
    let start = Instant::now();
    let profile = language::profile(language)?;

    let mut phrases = Vec::new();
    let mut verb_count = 0;
    for span in Phrases::new(text, profile.clone()) {
        let result = classify_with_profile(span.text, &profile);
        verb_count += result.verbs.len();
        phrases.push(PhraseAnalysis {
            text: span.text.to_string(),
            offset: span.offset,
            verbs: result.verbs,
            roles: result.roles.to_vec(),
            pattern: result.pattern,
            pattern_label: result.pattern.label().to_string(),
        });
    }

    tracing::debug!(
        language = %language,
        detected,
        phrases = phrases.len(),
        verbs = verb_count,
        "analysis complete"
    );

    let metadata = Metadata {
        total_bytes: text.len(),
        total_chars: text.chars().count(),
        processing_time_ms: start.elapsed().as_millis() as u64,
        phrase_count: phrases.len(),
        verb_count,
    };

    Ok(Analysis {
        language,
        detected,
        phrases,
        metadata,
    })
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

// Convenience functions

/// Analyze text with language detection and default configuration.
pub fn analyze_text(text: &str) -> Result<Analysis> {
    AnnotationSession::new().analyze(Input::from_text(text))
}

/// Analyze text under a fixed language.
pub fn analyze_text_with_language(text: &str, code: &str) -> Result<Analysis> {
    AnnotationSession::with_language(code)?.analyze(Input::from_text(text))
}
