//! Undercover Core — shared abstractions.
//!
//! This crate defines the seams every other crate depends on: the
//! key-value persistence interface and the random number source. It
//! contains no filesystem or game logic.

pub mod error;
pub mod rng;
pub mod storage;
