//! Opponent deck derivation
//!
//! Opponent decks are derived, not owned: a seeded roll picks one of a
//! few fixed adversary lineups, so the same battle seed always produces
//! the same opposition. Adversary card ids live in a reserved range that
//! the registry never allocates.

use alloc::vec::Vec;

use triad_battle::{Ability, BattleRng, Card, CardId, Deck};

use crate::error::GameResult;

/// First id of the reserved adversary range.
pub const OPPONENT_ID_BASE: u64 = 1 << 32;

/// The Bulwark: high health behind a shield wall.
fn bulwark_lineup() -> &'static [(u8, u8, Ability)] {
    &[
        (2, 6, Ability::Shield),
        (1, 5, Ability::Shield),
        (3, 4, Ability::Freeze),
    ]
}

/// The Chiller: disarm the front lanes and win on attrition.
fn chiller_lineup() -> &'static [(u8, u8, Ability)] {
    &[
        (2, 4, Ability::Freeze),
        (2, 4, Ability::Freeze),
        (4, 2, Ability::Shield),
    ]
}

/// The Gambler: thin stats, one spin of the wheel.
fn gambler_lineup() -> &'static [(u8, u8, Ability)] {
    &[(1, 2, Ability::Roulette), (3, 3, Ability::Freeze)]
}

/// Derive the opponent deck from the battle's RNG.
pub fn derive_opponent_deck<R: BattleRng>(rng: &mut R) -> GameResult<Deck> {
    let lineup = match rng.gen_range(3) {
        0 => bulwark_lineup(),
        1 => chiller_lineup(),
        _ => gambler_lineup(),
    };

    let cards: Vec<Card> = lineup
        .iter()
        .enumerate()
        .map(|(lane, &(attack, health, ability))| Card {
            id: CardId(OPPONENT_ID_BASE + lane as u64),
            attack,
            health,
            ability,
        })
        .collect();

    Ok(Deck::new(cards)?)
}
