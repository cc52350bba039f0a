//! The immutable vocabulary set.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::VocabularyLoadError;
use crate::pair::{WordPair, WordPairId};

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../data/vocabulary.json");

/// Ordered, read-only collection of word pairs.
///
/// Iteration order is the dataset's document order and never changes for
/// the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pairs: Vec<WordPair>,
    index: HashMap<WordPairId, usize>,
}

impl Vocabulary {
    /// Loads the bundled dataset.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyLoadError` if the bundled dataset fails
    /// validation. Callers should treat this as fatal.
    pub fn load_all() -> Result<Self, VocabularyLoadError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyLoadError::Io` if the file cannot be read, or any
    /// validation error from [`Vocabulary::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, VocabularyLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| VocabularyLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates a JSON array of word pairs.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` for invalid JSON, `Empty` for an empty array,
    /// `DuplicateId` for a repeated id and `BlankTerm` for a pair with an
    /// empty word.
    pub fn from_json(raw: &str) -> Result<Self, VocabularyLoadError> {
        let pairs: Vec<WordPair> = serde_json::from_str(raw)?;
        Self::from_pairs(pairs)
    }

    /// Builds a vocabulary from already-parsed pairs, applying the same
    /// validation as the loaders.
    ///
    /// # Errors
    ///
    /// See [`Vocabulary::from_json`].
    pub fn from_pairs(pairs: Vec<WordPair>) -> Result<Self, VocabularyLoadError> {
        if pairs.is_empty() {
            return Err(VocabularyLoadError::Empty);
        }

        let mut index = HashMap::with_capacity(pairs.len());
        for (position, pair) in pairs.iter().enumerate() {
            if pair.civilian_term.trim().is_empty() || pair.spy_term.trim().is_empty() {
                return Err(VocabularyLoadError::BlankTerm(pair.id));
            }
            if index.insert(pair.id, position).is_some() {
                return Err(VocabularyLoadError::DuplicateId(pair.id));
            }
        }

        debug!(pairs = pairs.len(), "vocabulary loaded");
        Ok(Self { pairs, index })
    }

    /// All pairs in dataset order.
    #[must_use]
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Iterates pairs in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    /// Looks up a pair by id.
    #[must_use]
    pub fn get(&self, id: WordPairId) -> Option<&WordPair> {
        self.index.get(&id).map(|&position| &self.pairs[position])
    }

    #[must_use]
    pub fn contains(&self, id: WordPairId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false` for a successfully loaded vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
