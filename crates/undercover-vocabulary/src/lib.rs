//! Undercover — Vocabulary Store.
//!
//! Exposes the immutable, ordered set of word pairs the game draws from.
//! The default dataset is compiled into the binary; an override file can
//! be loaded through the same validation path.

pub mod error;
pub mod pair;
pub mod store;

pub use error::VocabularyLoadError;
pub use pair::{WordPair, WordPairId};
pub use store::Vocabulary;
