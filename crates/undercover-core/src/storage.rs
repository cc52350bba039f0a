//! Key-value persistence abstraction.

use crate::error::StorageError;

/// Durable, scoped key-value storage holding opaque byte payloads.
///
/// Implementations decide where the bytes live; callers own the encoding.
pub trait KeyValueStore: Send + Sync {
    /// Load the payload stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}
