//! Round orchestration.

use tracing::{info, instrument};
use undercover_core::rng::DeterministicRng;
use undercover_rotation::{Progress, WordRotationManager};
use undercover_vocabulary::WordPair;

use crate::deal::{Seat, deal};
use crate::error::RoundError;
use crate::settings::RoundSettings;
use crate::table::Table;

/// A dealt but not yet started round.
#[derive(Debug, Clone)]
pub struct DealtRound {
    /// The pair whose words were dealt.
    pub pair: WordPair,
    /// Secret cards in passing order.
    pub seats: Vec<Seat>,
}

/// Drives rounds against an explicitly owned rotation manager.
///
/// A round's pair is only committed once the group confirms the round has
/// begun, so a dealt-then-abandoned round does not burn a word.
#[derive(Debug)]
pub struct RoundController {
    rotation: WordRotationManager,
    pending: Option<DealtRound>,
}

impl RoundController {
    #[must_use]
    pub fn new(rotation: WordRotationManager) -> Self {
        Self {
            rotation,
            pending: None,
        }
    }

    /// Selects the next unused pair and deals it. Replaces any round that
    /// was dealt but never confirmed.
    ///
    /// # Errors
    ///
    /// Returns a settings validation error, or `RoundError::Exhausted` when
    /// every pair has been used.
    #[instrument(skip(self, rng))]
    pub fn start_round(
        &mut self,
        settings: RoundSettings,
        rng: &mut dyn DeterministicRng,
    ) -> Result<DealtRound, RoundError> {
        settings.validate()?;

        let pair = self
            .rotation
            .select_next()
            .cloned()
            .ok_or(RoundError::Exhausted)?;
        let seats = deal(&pair, &settings, rng)?;
        info!(pair_id = %pair.id, "round dealt");

        let round = DealtRound { pair, seats };
        self.pending = Some(round.clone());
        Ok(round)
    }

    /// Marks the dealt pair as used and opens the elimination table.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NoPendingRound` if nothing has been dealt.
    #[instrument(skip(self))]
    pub fn confirm_start(&mut self) -> Result<Table, RoundError> {
        let round = self.pending.take().ok_or(RoundError::NoPendingRound)?;
        let outcome = self.rotation.commit(round.pair.id);
        info!(pair_id = %round.pair.id, ?outcome, "round started");
        Ok(Table::new(round.seats))
    }

    /// Drops the dealt round without marking its pair used.
    pub fn abandon_round(&mut self) -> Option<DealtRound> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&DealtRound> {
        self.pending.as_ref()
    }

    /// Forgets which pairs have been used.
    pub fn reset_history(&mut self) {
        self.rotation.reset();
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.rotation.progress()
    }

    #[must_use]
    pub fn rotation(&self) -> &WordRotationManager {
        &self.rotation
    }
}
