//! Session configuration types.

use crate::error::{ApiError, Result};
use valentia_core::{LanguageTag, SAMPLE_CHARS};

/// Configuration for an annotation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fixed language; `None` means detect per input.
    pub(crate) language: Option<LanguageTag>,
    /// Characters sampled for language detection.
    pub(crate) sample_chars: usize,
    /// Record a `Phrase` annotation per span during `annotate`.
    pub(crate) record_phrases: bool,
    /// Record a `Verb` annotation per verb hit during `annotate`.
    pub(crate) record_verbs: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: None,
            sample_chars: SAMPLE_CHARS,
            record_phrases: true,
            record_verbs: true,
        }
    }
}

impl SessionConfig {
    /// Create a builder for custom configuration.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// The fixed language, if any.
    pub fn language(&self) -> Option<LanguageTag> {
        self.language
    }

    /// Detection sample length in characters.
    pub fn sample_chars(&self) -> usize {
        self.sample_chars
    }
}

/// Builder for [`SessionConfig`].
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    language: Option<LanguageTag>,
    sample_chars: Option<usize>,
    record_phrases: Option<bool>,
    record_verbs: Option<bool>,
}

impl SessionConfigBuilder {
    /// Fix the language by code (e.g. `grc`, `la`, `en`).
    pub fn language(mut self, code: &str) -> Result<Self> {
        let tag = LanguageTag::from_code(code).ok_or_else(|| ApiError::UnsupportedLanguage {
            code: code.to_string(),
        })?;
        self.language = Some(tag);
        Ok(self)
    }

    /// Fix the language by tag.
    pub fn language_tag(mut self, tag: LanguageTag) -> Self {
        self.language = Some(tag);
        self
    }

    /// Set the detection sample length in characters.
    pub fn sample_chars(mut self, chars: usize) -> Self {
        self.sample_chars = Some(chars);
        self
    }

    /// Toggle automatic `Phrase` records during `annotate`.
    pub fn record_phrases(mut self, enabled: bool) -> Self {
        self.record_phrases = Some(enabled);
        self
    }

    /// Toggle automatic `Verb` records during `annotate`.
    pub fn record_verbs(mut self, enabled: bool) -> Self {
        self.record_verbs = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SessionConfig> {
        let defaults = SessionConfig::default();
        let sample_chars = self.sample_chars.unwrap_or(defaults.sample_chars);
        if sample_chars == 0 {
            return Err(ApiError::InvalidInput {
                reason: "sample_chars must be nonzero".to_string(),
            });
        }

        Ok(SessionConfig {
            language: self.language,
            sample_chars,
            record_phrases: self.record_phrases.unwrap_or(defaults.record_phrases),
            record_verbs: self.record_verbs.unwrap_or(defaults.record_verbs),
        })
    }
}
