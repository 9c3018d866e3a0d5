//! Script-range and stopword language detection.

use crate::language::loader;
use crate::types::LanguageTag;

/// Number of characters sampled from the head of the input.
pub const SAMPLE_CHARS: usize = 1000;

/// Detect the language of a text.
///
/// Only the first [`SAMPLE_CHARS`] characters are examined; a sample is
/// enough and keeps detection cheap on large documents. Signals run in
/// fixed priority order (Greek script run, then Latin stopwords); when
/// none fires the result degrades to [`LanguageTag::English`]. Pure and
/// deterministic, with no failure mode.
pub fn detect(text: &str) -> LanguageTag {
    detect_with_sample(text, SAMPLE_CHARS)
}

/// Detect with an explicit sample length in characters.
pub fn detect_with_sample(text: &str, sample_chars: usize) -> LanguageTag {
    let sample = head(text, sample_chars);
    for profile in loader::profiles() {
        if profile.signal_matches(sample) {
            return profile.tag();
        }
    }
    LanguageTag::fallback()
}

/// First `n` characters of `text`, without splitting a code point.
fn head(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_latin_stopwords() {
        assert_eq!(detect("Gallia est omnis divisa in partes tres"), LanguageTag::Latin);
    }

    #[test]
    fn test_detects_greek_script_run() {
        assert_eq!(detect("ο ανθρωπος αγαθος εστιν"), LanguageTag::Greek);
    }

    #[test]
    fn test_greek_wins_over_latin_stopwords() {
        // Both signals present; Greek has priority.
        assert_eq!(detect("ανθρωπος et natura"), LanguageTag::Greek);
    }

    #[test]
    fn test_polytonic_text_misses_script_range() {
        // The script range covers only unaccented letters, so fully
        // accented words never accumulate five consecutive hits. Known
        // ceiling of the heuristic.
        assert_eq!(detect("ἐν ἀρχῇ ἦν ὁ λόγος"), LanguageTag::English);
    }

    #[test]
    fn test_short_greek_run_not_enough() {
        // Four consecutive script characters stay under the threshold.
        assert_eq!(detect("θεος"), LanguageTag::English);
    }

    #[test]
    fn test_falls_back_to_english() {
        assert_eq!(detect("the quick brown fox"), LanguageTag::English);
        assert_eq!(detect(""), LanguageTag::English);
    }

    #[test]
    fn test_stopword_matching_is_whole_word() {
        // "vestibulum" and "sedes" contain stopwords only as substrings.
        assert_eq!(detect("vestibulum sedes"), LanguageTag::English);
    }

    #[test]
    fn test_sample_truncation() {
        // A Latin stopword beyond the sample window is never seen.
        let mut text = "x ".repeat(600);
        text.push_str("est");
        assert_eq!(detect(&text), LanguageTag::English);
        assert_eq!(detect_with_sample(&text, text.chars().count()), LanguageTag::Latin);
    }

    #[test]
    fn test_deterministic() {
        let sample = "Gallia est omnis divisa in partes tres";
        assert_eq!(detect(sample), detect(sample));
    }
}
