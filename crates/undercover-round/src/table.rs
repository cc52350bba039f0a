//! Elimination phase.

use serde::Serialize;
use tracing::info;

use crate::deal::{Role, Seat};
use crate::error::RoundError;

/// The side that won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Civilian,
    Spy,
}

/// Dealt seats plus who is still in the game.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Seat>,
    alive: Vec<bool>,
    winner: Option<Winner>,
}

impl Table {
    /// Seats everyone as alive. No winner is evaluated until the first
    /// toggle.
    #[must_use]
    pub fn new(seats: Vec<Seat>) -> Self {
        let alive = vec![true; seats.len()];
        Self {
            seats,
            alive,
            winner: None,
        }
    }

    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Whether the seat numbered `number` is still in the game.
    #[must_use]
    pub fn is_alive(&self, number: usize) -> bool {
        self.index_of(number)
            .is_ok_and(|index| self.alive[index])
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Eliminates a living seat or brings an eliminated one back, then
    /// re-evaluates the win condition.
    ///
    /// Once a winner is declared the table is frozen and further toggles
    /// return that winner unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::UnknownSeat` if no seat has that number.
    pub fn toggle(&mut self, number: usize) -> Result<Option<Winner>, RoundError> {
        let index = self.index_of(number)?;
        if self.winner.is_some() {
            return Ok(self.winner);
        }

        self.alive[index] = !self.alive[index];
        self.winner = self.evaluate();
        if let Some(winner) = self.winner {
            info!(?winner, "round decided");
        }
        Ok(self.winner)
    }

    /// Spies win once they match or outnumber everyone else still alive;
    /// civilians win once no spy is left.
    fn evaluate(&self) -> Option<Winner> {
        let mut spies = 0;
        let mut others = 0;
        for (seat, _) in self
            .seats
            .iter()
            .zip(&self.alive)
            .filter(|(_, alive)| **alive)
        {
            match seat.role {
                Role::Spy => spies += 1,
                Role::Civilian | Role::Whiteboard => others += 1,
            }
        }

        if spies >= others {
            Some(Winner::Spy)
        } else if spies == 0 {
            Some(Winner::Civilian)
        } else {
            None
        }
    }

    fn index_of(&self, number: usize) -> Result<usize, RoundError> {
        if number == 0 || number > self.seats.len() {
            return Err(RoundError::UnknownSeat(number));
        }
        Ok(number - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(roles: &[Role]) -> Table {
        let seats = roles
            .iter()
            .enumerate()
            .map(|(index, &role)| Seat {
                number: index + 1,
                role,
                word: None,
                image: None,
            })
            .collect();
        Table::new(seats)
    }

    #[test]
    fn test_new_table_has_everyone_alive_and_no_winner() {
        let table = table(&[Role::Civilian, Role::Spy, Role::Civilian]);
        assert!((1..=3).all(|n| table.is_alive(n)));
        assert_eq!(table.winner(), None);
    }

    #[test]
    fn test_eliminating_last_spy_wins_for_civilians() {
        let mut table = table(&[Role::Civilian, Role::Spy, Role::Civilian, Role::Civilian]);

        assert_eq!(table.toggle(2).unwrap(), Some(Winner::Civilian));
        assert!(!table.is_alive(2));
    }

    #[test]
    fn test_spies_win_when_matching_the_rest() {
        let mut table = table(&[
            Role::Spy,
            Role::Civilian,
            Role::Civilian,
            Role::Whiteboard,
            Role::Civilian,
        ]);

        assert_eq!(table.toggle(2).unwrap(), None);
        assert_eq!(table.toggle(3).unwrap(), None);
        assert_eq!(table.toggle(4).unwrap(), Some(Winner::Spy));
    }

    #[test]
    fn test_whiteboard_counts_against_spies() {
        let mut table = table(&[Role::Spy, Role::Civilian, Role::Whiteboard, Role::Civilian]);

        assert_eq!(table.toggle(2).unwrap(), None);
    }

    #[test]
    fn test_toggle_restores_eliminated_seat() {
        let mut table = table(&[
            Role::Spy,
            Role::Spy,
            Role::Civilian,
            Role::Civilian,
            Role::Civilian,
            Role::Civilian,
        ]);

        table.toggle(3).unwrap();
        assert!(!table.is_alive(3));
        table.toggle(3).unwrap();
        assert!(table.is_alive(3));
        assert_eq!(table.winner(), None);
    }

    #[test]
    fn test_table_frozen_after_winner() {
        let mut table = table(&[Role::Civilian, Role::Spy, Role::Civilian]);
        assert_eq!(table.toggle(2).unwrap(), Some(Winner::Civilian));

        assert_eq!(table.toggle(1).unwrap(), Some(Winner::Civilian));
        assert!(table.is_alive(1));
        assert!(!table.is_alive(2));
    }

    #[test]
    fn test_unknown_seat() {
        let mut table = table(&[Role::Civilian, Role::Spy, Role::Civilian]);
        assert_eq!(table.toggle(0), Err(RoundError::UnknownSeat(0)));
        assert_eq!(table.toggle(4), Err(RoundError::UnknownSeat(4)));
        assert!(!table.is_alive(4));
    }
}
