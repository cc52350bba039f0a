//! Test stores — in-memory `KeyValueStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use undercover_core::error::StorageError;
use undercover_core::storage::KeyValueStore;

/// An in-memory store that records every `save` call.
///
/// Saves can be switched to fail on demand with [`MemoryStore::fail_saves`]
/// to exercise degraded-durability paths; loads keep working.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    saves: Mutex<Vec<(String, Vec<u8>)>>,
    failing_saves: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `bytes` already present under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_entry(key: &str, bytes: &[u8]) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), bytes.to_vec());
        store
    }

    /// Make subsequent `save` calls fail (`true`) or succeed (`false`).
    pub fn fail_saves(&self, failing: bool) {
        self.failing_saves.store(failing, Ordering::SeqCst);
    }

    /// Current payload under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn entry(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Current payload under `key`, decoded as UTF-8.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned or the payload is not UTF-8.
    pub fn entry_str(&self, key: &str) -> Option<String> {
        self.entry(key)
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }

    /// Returns a snapshot of all successful saves, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saves(&self) -> Vec<(String, Vec<u8>)> {
        self.saves.lock().unwrap().clone()
    }

    /// Number of successful saves so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if self.failing_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("disk full".into()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), bytes.to_vec());
        self.saves
            .lock()
            .unwrap()
            .push((key.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

/// A store that always returns a backend error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::Backend("storage unavailable".into()))
    }

    fn save(&self, _key: &str, _bytes: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage unavailable".into()))
    }
}
