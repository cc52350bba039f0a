//! Undercover — Round Controller.
//!
//! Turns a word pair into a dealt table of secret roles, tracks
//! eliminations until one side wins, and tells the rotation manager when
//! a round has actually started so its pair is never served again.

pub mod controller;
pub mod deal;
pub mod error;
pub mod settings;
pub mod table;

pub use controller::{DealtRound, RoundController};
pub use deal::{Role, Seat, deal};
pub use error::RoundError;
pub use settings::RoundSettings;
pub use table::{Table, Winner};
