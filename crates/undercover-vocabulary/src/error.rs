//! Vocabulary loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::pair::WordPairId;

/// Fatal error raised when the vocabulary dataset cannot be used.
#[derive(Debug, Error)]
pub enum VocabularyLoadError {
    /// The dataset file could not be read.
    #[error("cannot read vocabulary file {path}: {source}")]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of word pairs.
    #[error("malformed vocabulary dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two pairs share the same identifier.
    #[error("duplicate word pair id {0}")]
    DuplicateId(WordPairId),

    /// A pair has an empty civilian or spy term.
    #[error("word pair {0} has a blank term")]
    BlankTerm(WordPairId),

    /// The dataset contains no pairs at all.
    #[error("vocabulary dataset is empty")]
    Empty,
}
