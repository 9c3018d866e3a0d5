//! Verb-lexicon and case-suffix role classification.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::Result;
use crate::language::{loader, LanguageProfile};
use crate::types::{CaseRole, LanguageTag, ValencyPattern};

/// One verb-lexicon hit inside a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbHit {
    /// The matched token, as written in the span.
    pub text: String,
    /// Byte offset of the token within the span.
    pub offset: usize,
}

/// Classification result for one phrase span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Verb-lexicon hits in order of first occurrence, duplicates kept.
    pub verbs: Vec<VerbHit>,
    /// Roles whose suffix heuristic fired, in canonical order.
    pub roles: SmallVec<[CaseRole; 4]>,
    /// Derived valency pattern.
    pub pattern: ValencyPattern,
}

/// Classify a span under `language`'s heuristics.
///
/// Total over its input: an empty or signal-free span yields no verbs,
/// no roles, and [`ValencyPattern::Complex`]. Suffix matching reports
/// span-level presence only; it does not attribute a case to a token and
/// it over-matches on purpose. That is the engine's documented accuracy
/// ceiling, not a defect.
pub fn classify(span: &str, language: LanguageTag) -> Result<Classification> {
    let profile = loader::profile(language)?;
    Ok(classify_with_profile(span, &profile))
}

/// Classify with an already-resolved profile.
pub fn classify_with_profile(span: &str, profile: &LanguageProfile) -> Classification {
    let verbs = profile
        .verb_regex()
        .find_iter(span)
        .map(|hit| VerbHit {
            text: hit.as_str().to_string(),
            offset: hit.start(),
        })
        .collect();

    let mut roles = SmallVec::new();
    for (role, matcher) in profile.case_matchers() {
        if matcher.is_match(span) {
            roles.push(*role);
        }
    }

    let pattern = ValencyPattern::from_roles(&roles);
    Classification {
        verbs,
        roles,
        pattern,
    }
}
