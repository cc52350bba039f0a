//! Secret role dealing.

use serde::Serialize;
use undercover_core::rng::DeterministicRng;
use undercover_vocabulary::WordPair;

use crate::error::RoundError;
use crate::settings::RoundSettings;

/// The role a player holds for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Holds the civilian word.
    Civilian,
    /// Holds the spy word.
    Spy,
    /// Holds no word at all.
    Whiteboard,
}

/// One player's secret card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    /// 1-based position in passing order.
    pub number: usize,
    pub role: Role,
    /// `None` for the whiteboard.
    pub word: Option<String>,
    pub image: Option<String>,
}

/// Deals shuffled seats for `pair`.
///
/// Places `settings.spies` spies, one whiteboard when
/// [`RoundSettings::seats_whiteboard`] holds, and civilians for the rest,
/// then shuffles with `rng`.
///
/// # Errors
///
/// Returns the [`RoundSettings::validate`] error for invalid settings.
pub fn deal(
    pair: &WordPair,
    settings: &RoundSettings,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<Seat>, RoundError> {
    settings.validate()?;

    let mut roles = Vec::with_capacity(usize::from(settings.players));
    roles.extend(std::iter::repeat_n(Role::Spy, usize::from(settings.spies)));
    if settings.seats_whiteboard() {
        roles.push(Role::Whiteboard);
    }
    roles.extend(std::iter::repeat_n(
        Role::Civilian,
        usize::from(settings.civilians()),
    ));

    shuffle(&mut roles, rng);

    let seats = roles
        .into_iter()
        .enumerate()
        .map(|(index, role)| {
            let (word, image) = match role {
                Role::Civilian => (
                    Some(pair.civilian_term.clone()),
                    pair.civilian_image.clone(),
                ),
                Role::Spy => (Some(pair.spy_term.clone()), pair.spy_image.clone()),
                Role::Whiteboard => (None, None),
            };
            Seat {
                number: index + 1,
                role,
                word,
                image,
            }
        })
        .collect();
    Ok(seats)
}

/// Fisher–Yates shuffle driven by the injected RNG.
#[allow(clippy::cast_possible_truncation)]
fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_u32_range(0, i as u32) as usize;
        items.swap(i, j);
    }
}
