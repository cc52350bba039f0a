//! In-memory usage history and its on-disk encoding.

use std::collections::HashSet;

use undercover_vocabulary::{Vocabulary, WordPairId};

use crate::error::HistoryLoadError;

/// Storage key holding the persisted history.
pub const USED_WORDS_KEY: &str = "who_is_spy_used_words";

/// Set of used word pair ids, remembered in the order they were committed.
///
/// Persisted as a plain JSON array (`[3,1,7]`); uniqueness is enforced
/// here, not by the format.
#[derive(Debug, Clone, Default)]
pub struct UsageHistory {
    order: Vec<WordPairId>,
    members: HashSet<WordPairId>,
}

impl UsageHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a persisted payload. Repeated ids are collapsed to their
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `HistoryLoadError::Malformed` if the payload is not a JSON
    /// array of non-negative integers.
    pub fn decode(bytes: &[u8]) -> Result<Self, HistoryLoadError> {
        let ids: Vec<WordPairId> = serde_json::from_slice(bytes)?;
        let mut history = Self::new();
        for id in ids {
            history.insert(id);
        }
        Ok(history)
    }

    /// Encodes the history as a JSON array in commit order.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for plain integers.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.order)
    }

    #[must_use]
    pub fn contains(&self, id: WordPairId) -> bool {
        self.members.contains(&id)
    }

    /// Adds `id`; returns `false` if it was already present.
    pub fn insert(&mut self, id: WordPairId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Drops ids that do not exist in `vocabulary`, returning how many
    /// were removed.
    pub fn retain_known(&mut self, vocabulary: &Vocabulary) -> usize {
        let before = self.order.len();
        self.order.retain(|id| vocabulary.contains(*id));
        self.members.retain(|id| vocabulary.contains(*id));
        before - self.order.len()
    }

    /// Used ids in commit order.
    #[must_use]
    pub fn ids(&self) -> &[WordPairId] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use undercover_vocabulary::WordPair;

    use super::*;

    fn ids(history: &UsageHistory) -> Vec<u32> {
        history.ids().iter().map(|id| id.0).collect()
    }

    #[test]
    fn test_insert_is_idempotent_and_keeps_commit_order() {
        let mut history = UsageHistory::new();

        assert!(history.insert(WordPairId(3)));
        assert!(history.insert(WordPairId(1)));
        assert!(!history.insert(WordPairId(3)));

        assert_eq!(ids(&history), vec![3, 1]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_decode_collapses_duplicates() {
        let history = UsageHistory::decode(b"[2,5,2,7,5]").unwrap();
        assert_eq!(ids(&history), vec![2, 5, 7]);
    }

    #[test]
    fn test_encode_writes_plain_array() {
        let mut history = UsageHistory::new();
        history.insert(WordPairId(4));
        history.insert(WordPairId(2));

        assert_eq!(history.encode().unwrap(), b"[4,2]");
    }

    #[test]
    fn test_empty_history_encodes_as_empty_array() {
        assert_eq!(UsageHistory::new().encode().unwrap(), b"[]");
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        for payload in [
            &b"not json"[..],
            b"{\"used\": [1]}",
            b"[\"1\", \"2\"]",
            b"[-1]",
            b"[1.5]",
            b"",
        ] {
            assert!(
                matches!(
                    UsageHistory::decode(payload),
                    Err(HistoryLoadError::Malformed(_))
                ),
                "payload {:?} should be rejected",
                String::from_utf8_lossy(payload)
            );
        }
    }

    #[test]
    fn test_retain_known_drops_ids_missing_from_vocabulary() {
        let vocabulary = Vocabulary::from_pairs(vec![
            WordPair::new(1, "a", "b"),
            WordPair::new(2, "c", "d"),
        ])
        .unwrap();
        let mut history = UsageHistory::decode(b"[2,99,1,42]").unwrap();

        let dropped = history.retain_known(&vocabulary);

        assert_eq!(dropped, 2);
        assert_eq!(ids(&history), vec![2, 1]);
        assert!(!history.contains(WordPairId(99)));
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = UsageHistory::decode(b"[1,2]").unwrap();
        history.clear();
        assert!(history.is_empty());
        assert!(!history.contains(WordPairId(1)));
    }
}
