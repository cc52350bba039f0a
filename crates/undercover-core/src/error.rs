//! Storage error types.

use thiserror::Error;

/// Error raised by a `KeyValueStore` implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying filesystem or device failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A backend-specific failure that is not an I/O error.
    #[error("storage backend error: {0}")]
    Backend(String),
}
