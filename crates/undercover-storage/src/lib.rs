//! Undercover — local durable storage.
//!
//! Provides the filesystem implementation of `KeyValueStore` used by the
//! binary. Tests use the in-memory doubles from the test-support crate.

pub mod file_store;

pub use file_store::FileStore;
