//! Punctuation and conjunction phrase segmentation.

use std::sync::Arc;

use crate::error::Result;
use crate::language::{loader, LanguageProfile};
use crate::types::LanguageTag;

/// One phrase-candidate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase<'a> {
    /// The trimmed span text; never empty.
    pub text: &'a str,
    /// Byte offset of `text` within the source.
    pub offset: usize,
}

/// Split `text` into phrase spans under `language`'s boundary rules.
///
/// Boundaries are the table's punctuation characters and its conjunction
/// words (whole-word, case-insensitive). Spans are the ordered, trimmed,
/// non-empty substrings between boundaries; consecutive boundaries yield
/// nothing. The iterator is lazy and borrows `text`.
pub fn segment(text: &str, language: LanguageTag) -> Result<Phrases<'_>> {
    Ok(Phrases::new(text, loader::profile(language)?))
}

/// Lazy iterator over phrase spans, in document order.
pub struct Phrases<'a> {
    text: &'a str,
    profile: Arc<LanguageProfile>,
    /// Byte position of the next unconsumed region.
    cursor: usize,
    done: bool,
}

impl<'a> Phrases<'a> {
    /// Segment `text` with an already-resolved profile.
    pub fn new(text: &'a str, profile: Arc<LanguageProfile>) -> Self {
        Self {
            text,
            profile,
            cursor: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Phrases<'a> {
    type Item = Phrase<'a>;

    fn next(&mut self) -> Option<Phrase<'a>> {
        while !self.done {
            let start = self.cursor;
            let raw = match self.profile.boundary_regex().find_at(self.text, start) {
                Some(boundary) => {
                    self.cursor = boundary.end();
                    &self.text[start..boundary.start()]
                }
                None => {
                    self.done = true;
                    &self.text[start..]
                }
            };

            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let leading = raw.len() - raw.trim_start().len();
            return Some(Phrase {
                text: trimmed,
                offset: start + leading,
            });
        }
        None
    }
}
