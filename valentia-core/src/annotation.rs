//! Annotation records and the per-session store.
//!
//! Records are created only through [`AnnotationStore::append`], which
//! trims the text, rejects empty text, and assigns a timestamp that never
//! runs backwards within the store. Records are immutable once created
//! and removed only by [`AnnotationStore::clear`].

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{CoreError, Result};

/// Grammatical role of a valency annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationRole {
    /// The predicate itself
    Verb,
    /// Subject argument
    Subject,
    /// Direct-object argument
    Object,
    /// Indirect-object argument
    Indirect,
}

/// Kind of annotation.
///
/// The role payload exists exactly for valency marks, which encodes the
/// "role is set iff the kind is a valency role" rule in the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "role")]
pub enum AnnotationKind {
    /// A phrase-boundary annotation
    Phrase,
    /// A valency-role annotation
    ValencyRole(AnnotationRole),
}

/// One immutable annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(flatten)]
    kind: AnnotationKind,
    text: String,
    created_at_ms: u64,
}

impl AnnotationRecord {
    /// Kind of this annotation.
    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// The role, present exactly when this is a valency mark.
    pub fn role(&self) -> Option<AnnotationRole> {
        match self.kind {
            AnnotationKind::ValencyRole(role) => Some(role),
            AnnotationKind::Phrase => None,
        }
    }

    /// The annotated text; trimmed and never empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation time as Unix-epoch milliseconds.
    ///
    /// Non-decreasing across records in one store.
    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }
}

/// In-memory, insertion-ordered annotation store for one session.
#[derive(Debug, Default, Clone)]
pub struct AnnotationStore {
    records: Vec<AnnotationRecord>,
    last_created_ms: u64,
}

impl AnnotationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record, assigning its timestamp.
    ///
    /// `text` is trimmed; empty text is rejected as an invalid argument.
    pub fn append(&mut self, kind: AnnotationKind, text: &str) -> Result<&AnnotationRecord> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::EmptyAnnotation);
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        // Clamp so timestamps never decrease even if the clock does.
        let created_at_ms = now.max(self.last_created_ms);
        self.last_created_ms = created_at_ms;

        self.records.push(AnnotationRecord {
            kind,
            text: text.to_string(),
            created_at_ms,
        });
        Ok(self.records.last().expect("record was just pushed"))
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[AnnotationRecord] {
        &self.records
    }

    /// Count records matching a predicate.
    pub fn count_by<P>(&self, predicate: P) -> usize
    where
        P: Fn(&AnnotationRecord) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).count()
    }

    /// Number of phrase annotations.
    pub fn phrase_count(&self) -> usize {
        self.count_by(|record| record.kind() == AnnotationKind::Phrase)
    }

    /// Number of valency annotations carrying `role`.
    pub fn role_count(&self, role: AnnotationRole) -> usize {
        self.count_by(|record| record.role() == Some(role))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = AnnotationStore::new();
        store.append(AnnotationKind::Phrase, "Veni").unwrap();
        store
            .append(AnnotationKind::ValencyRole(AnnotationRole::Verb), "vidi")
            .unwrap();
        let texts: Vec<&str> = store.all().iter().map(|r| r.text()).collect();
        assert_eq!(texts, ["Veni", "vidi"]);
    }

    #[test]
    fn test_role_present_iff_valency_kind() {
        let mut store = AnnotationStore::new();
        let phrase = store.append(AnnotationKind::Phrase, "Veni").unwrap();
        assert_eq!(phrase.role(), None);
        let verb = store
            .append(AnnotationKind::ValencyRole(AnnotationRole::Verb), "vidi")
            .unwrap();
        assert_eq!(verb.role(), Some(AnnotationRole::Verb));
    }

    #[test]
    fn test_append_trims_and_rejects_empty() {
        let mut store = AnnotationStore::new();
        let record = store.append(AnnotationKind::Phrase, "  spaced  ").unwrap();
        assert_eq!(record.text(), "spaced");
        assert!(matches!(
            store.append(AnnotationKind::Phrase, "   "),
            Err(CoreError::EmptyAnnotation)
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut store = AnnotationStore::new();
        for _ in 0..50 {
            store.append(AnnotationKind::Phrase, "x").unwrap();
        }
        let stamps: Vec<u64> = store.all().iter().map(|r| r.created_at_ms()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = AnnotationStore::new();
        store.append(AnnotationKind::Phrase, "r1").unwrap();
        store
            .append(AnnotationKind::ValencyRole(AnnotationRole::Object), "r2")
            .unwrap();
        store.clear();
        assert!(store.all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_count_by_and_counters() {
        let mut store = AnnotationStore::new();
        store.append(AnnotationKind::Phrase, "a").unwrap();
        store.append(AnnotationKind::Phrase, "b").unwrap();
        store
            .append(AnnotationKind::ValencyRole(AnnotationRole::Verb), "c")
            .unwrap();
        store
            .append(AnnotationKind::ValencyRole(AnnotationRole::Subject), "d")
            .unwrap();

        assert_eq!(store.phrase_count(), 2);
        assert_eq!(store.role_count(AnnotationRole::Verb), 1);
        assert_eq!(store.role_count(AnnotationRole::Indirect), 0);
        assert_eq!(store.count_by(|r| r.text().len() == 1), 4);
    }

    #[test]
    fn test_record_serialization_shape() {
        let mut store = AnnotationStore::new();
        store
            .append(AnnotationKind::ValencyRole(AnnotationRole::Verb), "vidi")
            .unwrap();
        let json = serde_json::to_value(&store.all()[0]).unwrap();
        assert_eq!(json["kind"], "ValencyRole");
        assert_eq!(json["role"], "Verb");
        assert_eq!(json["text"], "vidi");

        store.append(AnnotationKind::Phrase, "Veni").unwrap();
        let json = serde_json::to_value(&store.all()[1]).unwrap();
        assert_eq!(json["kind"], "Phrase");
        assert!(json.get("role").is_none());
    }
}
