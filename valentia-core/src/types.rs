//! Core value types shared across the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported language, a closed set.
///
/// [`LanguageTag::English`] doubles as the detection fallback for text
/// that carries neither a Greek script run nor Latin stopwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageTag {
    /// Ancient Greek
    Greek,
    /// Latin
    Latin,
    /// English (detection fallback)
    English,
}

impl LanguageTag {
    /// All supported languages, in detection priority order.
    pub const ALL: [LanguageTag; 3] = [LanguageTag::Greek, LanguageTag::Latin, LanguageTag::English];

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageTag::Greek => "grc",
            LanguageTag::Latin => "la",
            LanguageTag::English => "en",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageTag::Greek => "Greek",
            LanguageTag::Latin => "Latin",
            LanguageTag::English => "English",
        }
    }

    /// Parse a language code or name, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "grc" | "el" | "greek" => Some(LanguageTag::Greek),
            "la" | "lat" | "latin" => Some(LanguageTag::Latin),
            "en" | "eng" | "english" => Some(LanguageTag::English),
            _ => None,
        }
    }

    /// Language used when no detection signal matches.
    pub fn fallback() -> Self {
        LanguageTag::English
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grammatical case inferred from word-ending heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseRole {
    /// Subject case
    Nominative,
    /// Possessive case
    Genitive,
    /// Indirect-object case
    Dative,
    /// Direct-object case
    Accusative,
}

impl CaseRole {
    /// Canonical reporting order for detected roles.
    pub const ALL: [CaseRole; 4] = [
        CaseRole::Nominative,
        CaseRole::Genitive,
        CaseRole::Dative,
        CaseRole::Accusative,
    ];

    /// Three-letter tag used in pattern labels.
    pub fn tag(&self) -> &'static str {
        match self {
            CaseRole::Nominative => "NOM",
            CaseRole::Genitive => "GEN",
            CaseRole::Dative => "DAT",
            CaseRole::Accusative => "ACC",
        }
    }
}

impl fmt::Display for CaseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Coarse valency pattern derived from span-level case-role presence.
///
/// Derivation is first-match-wins: nominative plus accusative plus dative
/// is ditransitive, nominative plus accusative is transitive, nominative
/// alone is intransitive, anything else is unclassified. The pattern is a
/// pure function of the span text and language and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValencyPattern {
    /// NOM-ACC-DAT
    Ditransitive,
    /// NOM-ACC
    Transitive,
    /// NOM
    Intransitive,
    /// Unclassified
    Complex,
}

impl ValencyPattern {
    /// Derive the pattern from the detected role presence set.
    pub fn from_roles(roles: &[CaseRole]) -> Self {
        let has = |role: CaseRole| roles.contains(&role);
        if has(CaseRole::Nominative) && has(CaseRole::Accusative) && has(CaseRole::Dative) {
            ValencyPattern::Ditransitive
        } else if has(CaseRole::Nominative) && has(CaseRole::Accusative) {
            ValencyPattern::Transitive
        } else if has(CaseRole::Nominative) {
            ValencyPattern::Intransitive
        } else {
            ValencyPattern::Complex
        }
    }

    /// Display label, e.g. `NOM-ACC-DAT`.
    pub fn label(&self) -> &'static str {
        match self {
            ValencyPattern::Ditransitive => "NOM-ACC-DAT",
            ValencyPattern::Transitive => "NOM-ACC",
            ValencyPattern::Intransitive => "NOM",
            ValencyPattern::Complex => "Complex",
        }
    }

    /// The role sequence this pattern stands for (empty for `Complex`).
    pub fn roles(&self) -> &'static [CaseRole] {
        match self {
            ValencyPattern::Ditransitive => {
                &[CaseRole::Nominative, CaseRole::Accusative, CaseRole::Dative]
            }
            ValencyPattern::Transitive => &[CaseRole::Nominative, CaseRole::Accusative],
            ValencyPattern::Intransitive => &[CaseRole::Nominative],
            ValencyPattern::Complex => &[],
        }
    }
}

impl fmt::Display for ValencyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
