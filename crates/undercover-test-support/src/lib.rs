//! Shared test doubles for the Undercover party game.

mod rng;
mod store;

pub use rng::{MockRng, SequenceRng};
pub use store::{FailingStore, MemoryStore};
