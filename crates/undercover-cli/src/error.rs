//! Undercover CLI — error types.

use thiserror::Error;
use undercover_round::RoundError;
use undercover_vocabulary::VocabularyLoadError;

/// Errors that stop the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable or argument is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The vocabulary could not be loaded.
    #[error(transparent)]
    Vocabulary(#[from] VocabularyLoadError),

    /// The round could not be set up.
    #[error("round error: {0}")]
    Round(#[from] RoundError),

    /// Reading from or writing to the terminal failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
