//! Round errors.

use thiserror::Error;

use crate::settings::{MAX_PLAYERS, MIN_PLAYERS};

/// Errors surfaced to whoever drives a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    /// Player count outside the supported range.
    #[error(
        "player count must be between {min} and {max}, got {0}",
        min = MIN_PLAYERS,
        max = MAX_PLAYERS
    )]
    InvalidPlayerCount(u8),

    /// Spies must be at least one and strictly fewer than half the table.
    #[error("{spies} spies is not valid for {players} players")]
    InvalidSpyCount {
        /// Requested spies.
        spies: u8,
        /// Requested players.
        players: u8,
    },

    /// Every word pair has been used.
    #[error("no words remain, please reset the usage history")]
    Exhausted,

    /// `confirm_start` was called without a dealt round.
    #[error("no round has been dealt")]
    NoPendingRound,

    /// The seat number does not exist at this table.
    #[error("no seat numbered {0}")]
    UnknownSeat(usize),
}
