mod resolve;

use alloc::vec::Vec;

use crate::priority::PriorityTable;
use crate::resolve::{resolve_battle, BattleEvent, BattleOutcome};
use crate::types::{Ability, Card, Deck};

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

pub(crate) fn card(id: u64, attack: u8, health: u8, ability: Ability) -> Card {
    Card::new(id, attack, health, ability)
}

pub(crate) fn deck(cards: &[Card]) -> Deck {
    Deck::new(cards.to_vec()).expect("test decks stay within the size bound")
}

/// Resolve with the default priority table.
pub(crate) fn run_battle(challenger: &Deck, opponent: &Deck, draw: u8) -> BattleOutcome {
    resolve_battle(challenger, opponent, &PriorityTable::new(), draw)
}

/// Collect the ability-effect events, dropping the Clash/BattleEnd tail.
pub(crate) fn effect_events(outcome: &BattleOutcome) -> Vec<BattleEvent> {
    outcome
        .events
        .iter()
        .filter(|e| !matches!(e, BattleEvent::Clash { .. } | BattleEvent::BattleEnd { .. }))
        .cloned()
        .collect()
}
