//! Usage history errors.
//!
//! Neither error escapes `WordRotationManager`; both are logged and
//! absorbed at the manager boundary.

use thiserror::Error;
use undercover_core::error::StorageError;

/// Persisted history could not be read. Recovered by starting empty.
#[derive(Debug, Error)]
pub enum HistoryLoadError {
    /// The store failed to read.
    #[error("usage history could not be read: {0}")]
    Storage(#[from] StorageError),

    /// The stored payload is not a list of word pair ids.
    #[error("usage history is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// History could not be written. Recovered by keeping in-memory state and
/// retrying on the next mutation.
#[derive(Debug, Error)]
pub enum HistoryPersistError {
    /// The store failed to write.
    #[error("usage history could not be written: {0}")]
    Storage(#[from] StorageError),

    /// The history could not be serialized.
    #[error("usage history could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}
