//! The word rotation manager.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use undercover_core::storage::KeyValueStore;
use undercover_vocabulary::{Vocabulary, WordPair, WordPairId};

use crate::error::{HistoryLoadError, HistoryPersistError};
use crate::history::{USED_WORDS_KEY, UsageHistory};

/// Snapshot of how much of the vocabulary has been used.
///
/// Always satisfies `used + remaining == total` and `used <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of pairs in the vocabulary.
    pub total: usize,
    /// Number of pairs already served to a started round.
    pub used: usize,
    /// Number of pairs still available.
    pub remaining: usize,
}

/// Result of [`WordRotationManager::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The id was newly marked used. A write was attempted; check
    /// [`WordRotationManager::persistence_degraded`] for its result.
    Recorded,
    /// The id was already used; nothing was written.
    AlreadyUsed,
    /// The id is not part of the vocabulary; nothing changed.
    UnknownId,
}

/// Serves word pairs at most once per cycle and persists which ones have
/// been used.
///
/// Selection policy: the first pair in vocabulary order whose id is not in
/// the usage history. Selection is side-effect free; a pair only counts as
/// used once [`commit`](Self::commit) is called for it.
///
/// The manager never fails after construction. Storage read problems
/// degrade to an empty history and write problems are logged, leaving the
/// in-memory state authoritative for the rest of the process.
pub struct WordRotationManager {
    vocabulary: Vocabulary,
    store: Arc<dyn KeyValueStore>,
    history: UsageHistory,
    persistence_degraded: bool,
}

impl fmt::Debug for WordRotationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordRotationManager")
            .field("total", &self.vocabulary.len())
            .field("history", &self.history)
            .field("persistence_degraded", &self.persistence_degraded)
            .finish_non_exhaustive()
    }
}

impl WordRotationManager {
    /// Creates a manager, restoring usage history from `store`.
    ///
    /// A missing, unreadable or malformed history is treated as "nothing
    /// used yet". Persisted ids that no longer exist in `vocabulary` are
    /// dropped.
    #[must_use]
    pub fn new(vocabulary: Vocabulary, store: Arc<dyn KeyValueStore>) -> Self {
        let history = match load_history(store.as_ref()) {
            Ok(mut history) => {
                let dropped = history.retain_known(&vocabulary);
                if dropped > 0 {
                    warn!(dropped, "ignoring used ids that are not in the vocabulary");
                }
                history
            }
            Err(e) => {
                warn!(error = %e, "failed to load usage history; starting with none used");
                UsageHistory::new()
            }
        };

        info!(
            total = vocabulary.len(),
            used = history.len(),
            "word rotation ready"
        );

        Self {
            vocabulary,
            store,
            history,
            persistence_degraded: false,
        }
    }

    /// Returns the next unused pair, or `None` when every pair is used.
    ///
    /// Calling this repeatedly without a commit returns the same pair.
    #[must_use]
    pub fn select_next(&self) -> Option<&WordPair> {
        self.vocabulary
            .iter()
            .find(|pair| !self.history.contains(pair.id))
    }

    /// Marks `id` as used and persists the history.
    ///
    /// Already-used ids are a no-op without a storage write. A failed write
    /// is logged; the id still counts as used for this process and the
    /// next mutation retries the write.
    #[instrument(skip(self))]
    pub fn commit(&mut self, id: WordPairId) -> CommitOutcome {
        if !self.vocabulary.contains(id) {
            warn!("refusing to mark an id that is not in the vocabulary");
            return CommitOutcome::UnknownId;
        }
        if !self.history.insert(id) {
            debug!("word pair already used");
            return CommitOutcome::AlreadyUsed;
        }

        self.persist();
        CommitOutcome::Recorded
    }

    /// Clears the usage history and persists the empty state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let cleared = self.history.len();
        self.history.clear();
        self.persist();
        info!(cleared, "usage history reset");
    }

    /// Returns the current usage counts.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let total = self.vocabulary.len();
        let used = self.history.len();
        Progress {
            total,
            used,
            remaining: total - used,
        }
    }

    #[must_use]
    pub fn is_used(&self, id: WordPairId) -> bool {
        self.history.contains(id)
    }

    /// Used ids in commit order.
    #[must_use]
    pub fn used_ids(&self) -> &[WordPairId] {
        self.history.ids()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// `true` when the most recent storage write failed.
    #[must_use]
    pub fn persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    fn persist(&mut self) {
        match self.try_persist() {
            Ok(()) => {
                if self.persistence_degraded {
                    info!("usage history persisted after earlier failure");
                }
                self.persistence_degraded = false;
            }
            Err(e) => {
                warn!(error = %e, "failed to persist usage history; continuing in memory");
                self.persistence_degraded = true;
            }
        }
    }

    fn try_persist(&self) -> Result<(), HistoryPersistError> {
        let bytes = self.history.encode().map_err(HistoryPersistError::Encode)?;
        self.store.save(USED_WORDS_KEY, &bytes)?;
        Ok(())
    }
}

fn load_history(store: &dyn KeyValueStore) -> Result<UsageHistory, HistoryLoadError> {
    match store.load(USED_WORDS_KEY)? {
        Some(bytes) => UsageHistory::decode(&bytes),
        None => Ok(UsageHistory::new()),
    }
}

#[cfg(test)]
mod tests {
    use undercover_test_support::MemoryStore;

    use super::*;

    fn manager_with(ids: &[u32]) -> WordRotationManager {
        let pairs = ids
            .iter()
            .map(|&id| WordPair::new(id, &format!("c{id}"), &format!("s{id}")))
            .collect();
        let vocabulary = Vocabulary::from_pairs(pairs).unwrap();
        WordRotationManager::new(vocabulary, Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_progress_of_fresh_manager() {
        let manager = manager_with(&[1, 2, 3]);
        assert_eq!(
            manager.progress(),
            Progress {
                total: 3,
                used: 0,
                remaining: 3
            }
        );
    }

    #[test]
    fn test_commit_outcomes() {
        let mut manager = manager_with(&[1, 2]);

        assert_eq!(manager.commit(WordPairId(2)), CommitOutcome::Recorded);
        assert_eq!(manager.commit(WordPairId(2)), CommitOutcome::AlreadyUsed);
        assert_eq!(manager.commit(WordPairId(8)), CommitOutcome::UnknownId);
        assert_eq!(manager.progress().used, 1);
    }

    #[test]
    fn test_selection_skips_used_pairs_in_dataset_order() {
        let mut manager = manager_with(&[10, 20, 30]);

        manager.commit(WordPairId(10));
        manager.commit(WordPairId(30));

        assert_eq!(manager.select_next().unwrap().id, WordPairId(20));
    }

    #[test]
    fn test_debug_does_not_require_store_debug() {
        let manager = manager_with(&[1]);
        let rendered = format!("{manager:?}");
        assert!(rendered.contains("WordRotationManager"));
        assert!(rendered.contains("total: 1"));
    }
}
