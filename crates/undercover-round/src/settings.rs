//! Round configuration.

use crate::error::RoundError;

/// Smallest playable table.
pub const MIN_PLAYERS: u8 = 3;
/// Largest supported table.
pub const MAX_PLAYERS: u8 = 20;
/// The whiteboard role is only dealt at tables of at least this size.
pub const WHITEBOARD_MIN_PLAYERS: u8 = 5;

/// How many players sit at the table and which roles they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    /// Total number of players.
    pub players: u8,
    /// Number of players who receive the spy word.
    pub spies: u8,
    /// Deal one blank "whiteboard" role, if the table is large enough.
    pub whiteboard: bool,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            players: 5,
            spies: 1,
            whiteboard: false,
        }
    }
}

impl RoundSettings {
    /// Checks the player and spy counts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlayerCount` outside `3..=20` players and
    /// `InvalidSpyCount` unless `1 <= spies` and `2 * spies < players`.
    pub fn validate(&self) -> Result<(), RoundError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(RoundError::InvalidPlayerCount(self.players));
        }
        if self.spies == 0 || self.spies > Self::max_spies(self.players) {
            return Err(RoundError::InvalidSpyCount {
                spies: self.spies,
                players: self.players,
            });
        }
        Ok(())
    }

    /// Largest spy count allowed for `players`.
    #[must_use]
    pub fn max_spies(players: u8) -> u8 {
        players.saturating_sub(1) / 2
    }

    /// Whether a whiteboard seat is actually dealt.
    #[must_use]
    pub fn seats_whiteboard(&self) -> bool {
        self.whiteboard && self.players >= WHITEBOARD_MIN_PLAYERS
    }

    /// Number of civilian seats after spies and whiteboard are placed.
    /// Zero when the spies alone fill the table.
    #[must_use]
    pub fn civilians(&self) -> u8 {
        self.players
            .saturating_sub(self.spies)
            .saturating_sub(u8::from(self.seats_whiteboard()))
    }
}
