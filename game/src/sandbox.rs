//! Sandbox mode for custom battles
//!
//! A harness around the resolver that skips ownership and the registry
//! entirely: hand it raw card stats, a priority table and a seed, and it
//! resolves the battle exactly as the engine would.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use triad_battle::{
    resolve_battle, Ability, BattleOutcome, BattleRng, Card, CardId, Deck, PriorityTable,
    XorShiftRng,
};

use crate::error::GameResult;
use crate::opponents::OPPONENT_ID_BASE;

/// Card stats for a sandbox battle; no identity, no owner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxCard {
    pub attack: u8,
    pub health: u8,
    pub ability: Ability,
}

/// Run a battle between two hand-built sides.
///
/// The seed is consumed exactly like the engine consumes it: the
/// percentile draw is the first value off the RNG. Deck size bounds
/// still apply; everything else is bypassed.
pub fn run_sandbox_battle(
    challenger: &[SandboxCard],
    opponent: &[SandboxCard],
    priorities: &PriorityTable,
    seed: u64,
) -> GameResult<BattleOutcome> {
    let challenger = sandbox_deck(challenger, 1)?;
    let opponent = sandbox_deck(opponent, OPPONENT_ID_BASE)?;

    let mut rng = XorShiftRng::seed_from_u64(seed);
    let draw = rng.draw_percent();

    Ok(resolve_battle(&challenger, &opponent, priorities, draw))
}

fn sandbox_deck(cards: &[SandboxCard], id_base: u64) -> GameResult<Deck> {
    let cards: Vec<Card> = cards
        .iter()
        .enumerate()
        .map(|(lane, sc)| Card {
            id: CardId(id_base + lane as u64),
            attack: sc.attack,
            health: sc.health,
            ability: sc.ability,
        })
        .collect();
    Ok(Deck::new(cards)?)
}
