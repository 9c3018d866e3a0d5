//! Compiled runtime form of a language table.
//!
//! Bridges the TOML configuration and the matchers the detector,
//! segmenter, and classifier run against. All patterns compile once here;
//! the pipeline itself never builds a regex.

use regex::{Regex, RegexBuilder};

use crate::error::CoreError;
use crate::language::config::LanguageTable;
use crate::types::{CaseRole, LanguageTag};

/// Detection signal compiled from a table.
#[derive(Debug, Clone)]
enum DetectionSignal {
    /// Consecutive script-character run test
    Script(Regex),
    /// Whole-word stopword test
    Stopwords(Regex),
    /// Matches when no other language's signal does
    Fallback,
}

/// Compiled rules for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    tag: LanguageTag,
    name: String,
    signal: DetectionSignal,
    boundary: Regex,
    verbs: Regex,
    cases: [(CaseRole, Regex); 4],
}

impl LanguageProfile {
    /// Validate a table and compile it into matchers.
    pub fn from_table(tag: LanguageTag, table: &LanguageTable) -> Result<Self, CoreError> {
        table.validate().map_err(|reason| CoreError::InvalidTable {
            language: table.metadata.code.clone(),
            reason,
        })?;

        let signal = if let Some(pattern) = &table.detection.script_pattern {
            DetectionSignal::Script(compile(tag, pattern, false)?)
        } else if !table.detection.stopwords.is_empty() {
            let pattern = word_alternation(&table.detection.stopwords);
            DetectionSignal::Stopwords(compile(tag, &pattern, true)?)
        } else {
            DetectionSignal::Fallback
        };

        let boundary = compile(tag, &boundary_pattern(table), true)?;
        let verbs = compile(tag, &word_alternation(&table.verbs.lexicon), true)?;

        let cases = [
            (CaseRole::Nominative, compile(tag, &table.cases.nominative, true)?),
            (CaseRole::Genitive, compile(tag, &table.cases.genitive, true)?),
            (CaseRole::Dative, compile(tag, &table.cases.dative, true)?),
            (CaseRole::Accusative, compile(tag, &table.cases.accusative, true)?),
        ];

        Ok(Self {
            tag,
            name: table.metadata.name.clone(),
            signal,
            boundary,
            verbs,
            cases,
        })
    }

    /// The language this profile belongs to.
    pub fn tag(&self) -> LanguageTag {
        self.tag
    }

    /// Human-readable language name from the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this language's detection signal fires on the sample.
    pub(crate) fn signal_matches(&self, sample: &str) -> bool {
        match &self.signal {
            DetectionSignal::Script(re) | DetectionSignal::Stopwords(re) => re.is_match(sample),
            DetectionSignal::Fallback => false,
        }
    }

    /// Phrase boundary matcher: punctuation plus conjunction words.
    pub(crate) fn boundary_regex(&self) -> &Regex {
        &self.boundary
    }

    /// Whole-word verb lexicon matcher.
    pub(crate) fn verb_regex(&self) -> &Regex {
        &self.verbs
    }

    /// Case matchers in canonical role order.
    pub(crate) fn case_matchers(&self) -> &[(CaseRole, Regex); 4] {
        &self.cases
    }
}

/// Boundary pattern: a punctuation class alternated with whole-word
/// conjunctions, e.g. `[,;.!?]|\b(?:et|sed)\b`.
fn boundary_pattern(table: &LanguageTable) -> String {
    let mut pattern = String::from("[");
    for ch in &table.boundaries.punctuation {
        pattern.push_str(&regex::escape(&ch.to_string()));
    }
    pattern.push(']');

    if !table.conjunctions.words.is_empty() {
        pattern.push('|');
        pattern.push_str(&word_alternation(&table.conjunctions.words));
    }

    pattern
}

/// Whole-word alternation over a word list.
fn word_alternation(words: &[String]) -> String {
    let escaped: Vec<String> = words.iter().map(|word| regex::escape(word)).collect();
    format!(r"\b(?:{})\b", escaped.join("|"))
}

fn compile(tag: LanguageTag, pattern: &str, case_insensitive: bool) -> Result<Regex, CoreError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| CoreError::InvalidPattern {
            language: tag.code().to_string(),
            source,
        })
}
