//! Undercover — Word Rotation.
//!
//! Hands out word pairs at most once per cycle. Selection never consumes
//! a pair; only an explicit commit marks it used, and that mark is
//! persisted so it survives restarts until the history is reset.

pub mod error;
pub mod history;
pub mod manager;

pub use error::{HistoryLoadError, HistoryPersistError};
pub use history::{USED_WORDS_KEY, UsageHistory};
pub use manager::{CommitOutcome, Progress, WordRotationManager};
