//! Configuration schema for per-language rule tables.
//!
//! This module defines the TOML schema the embedded language tables are
//! written in, plus the structural validation that runs before any table
//! is compiled into a profile.

use serde::{Deserialize, Serialize};

/// Root of one language's rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageTable {
    /// Language metadata
    pub metadata: Metadata,
    /// Detection signal
    #[serde(default)]
    pub detection: Detection,
    /// Phrase boundary punctuation
    pub boundaries: Boundaries,
    /// Conjunctions treated as phrase boundaries
    pub conjunctions: Conjunctions,
    /// Closed verb lexicon
    pub verbs: Verbs,
    /// Case-suffix heuristics
    pub cases: Cases,
}

/// Language metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short language code
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Detection signal configuration.
///
/// Exactly one of the three forms must be configured: a script pattern,
/// a stopword list, or the fallback flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Detection {
    /// Pattern matched against the sample; a hit selects this language
    pub script_pattern: Option<String>,
    /// Whole-word stopwords; any hit selects this language
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Selected when no other language's signal matches
    #[serde(default)]
    pub fallback: bool,
}

/// Phrase boundary punctuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundaries {
    /// Characters that end a phrase-candidate span
    pub punctuation: Vec<char>,
}

/// Conjunction words treated as phrase boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conjunctions {
    /// Whole-word, case-insensitive boundary tokens
    pub words: Vec<String>,
}

/// Closed verb lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verbs {
    /// Whole-word, case-insensitive verb forms
    pub lexicon: Vec<String>,
}

/// Case-suffix heuristics, one whole-word pattern per role.
///
/// These are span-level presence tests, not per-token morphology; they
/// over-match by design and that ceiling is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cases {
    /// Nominative suffix pattern
    pub nominative: String,
    /// Genitive suffix pattern
    pub genitive: String,
    /// Dative suffix pattern
    pub dative: String,
    /// Accusative suffix pattern
    pub accusative: String,
}

impl Cases {
    /// Patterns in canonical role order.
    pub(crate) fn patterns(&self) -> [(&'static str, &str); 4] {
        [
            ("nominative", self.nominative.as_str()),
            ("genitive", self.genitive.as_str()),
            ("dative", self.dative.as_str()),
            ("accusative", self.accusative.as_str()),
        ]
    }
}

impl LanguageTable {
    /// Validate structural requirements before compilation.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.boundaries.punctuation.is_empty() {
            return Err("no boundary punctuation defined".to_string());
        }
        if self.verbs.lexicon.is_empty() {
            return Err("verb lexicon is empty".to_string());
        }
        // Blank words would compile into zero-width alternatives, so every
        // list entry must carry at least one non-whitespace character.
        let lists = [
            ("conjunction list", &self.conjunctions.words),
            ("stopword list", &self.detection.stopwords),
            ("verb lexicon", &self.verbs.lexicon),
        ];
        for (name, words) in lists {
            if words.iter().any(|word| word.trim().is_empty()) {
                return Err(format!("{name} contains a blank entry"));
            }
        }
        for (role, pattern) in self.cases.patterns() {
            if pattern.trim().is_empty() {
                return Err(format!("{role} suffix pattern is empty"));
            }
        }

        let signals = [
            self.detection.script_pattern.is_some(),
            !self.detection.stopwords.is_empty(),
            self.detection.fallback,
        ];
        if signals.iter().filter(|set| **set).count() != 1 {
            return Err("exactly one detection signal must be configured".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_table() -> LanguageTable {
        toml::from_str(
            r#"
            [metadata]
            code = "la"
            name = "Latin"

            [detection]
            stopwords = ["et"]

            [boundaries]
            punctuation = [","]

            [conjunctions]
            words = ["et"]

            [verbs]
            lexicon = ["sum"]

            [cases]
            nominative = '\b\w+us\b'
            genitive = '\b\w+i\b'
            dative = '\b\w+o\b'
            accusative = '\b\w+um\b'
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_minimal_table_validates() {
        assert!(minimal_table().validate().is_ok());
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let mut table = minimal_table();
        table.verbs.lexicon.clear();
        assert!(table.validate().unwrap_err().contains("lexicon"));
    }

    #[test]
    fn test_empty_punctuation_rejected() {
        let mut table = minimal_table();
        table.boundaries.punctuation.clear();
        assert!(table.validate().unwrap_err().contains("punctuation"));
    }

    #[test]
    fn test_blank_conjunction_word_rejected() {
        // A blank conjunction word would become a zero-width boundary
        // alternative and pin the segmenter at one cursor position.
        let mut table = minimal_table();
        table.conjunctions.words.push(String::new());
        assert!(table.validate().unwrap_err().contains("conjunction"));
    }

    #[test]
    fn test_blank_stopword_rejected() {
        let mut table = minimal_table();
        table.detection.stopwords.push("  ".to_string());
        assert!(table.validate().unwrap_err().contains("stopword"));
    }

    #[test]
    fn test_blank_verb_rejected() {
        let mut table = minimal_table();
        table.verbs.lexicon.push(String::new());
        assert!(table.validate().unwrap_err().contains("blank"));
    }

    #[test]
    fn test_blank_case_pattern_rejected() {
        let mut table = minimal_table();
        table.cases.dative = "  ".to_string();
        assert!(table.validate().unwrap_err().contains("dative"));
    }

    #[test]
    fn test_missing_detection_signal_rejected() {
        let mut table = minimal_table();
        table.detection.stopwords.clear();
        assert!(table.validate().unwrap_err().contains("detection"));
    }

    #[test]
    fn test_conflicting_detection_signals_rejected() {
        let mut table = minimal_table();
        table.detection.fallback = true;
        assert!(table.validate().unwrap_err().contains("detection"));
    }
}
