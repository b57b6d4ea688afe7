#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
pub mod env;
pub mod error;
pub mod history;
pub mod ledger;
pub mod opponents;
pub mod registry;
pub mod sandbox;

#[cfg(test)]
mod tests;

pub use engine::{BattleReport, GameEngine, PriorityAssigned, TokenTransfer};
pub use error::{GameError, GameResult};
pub use history::{battle_key, BattleHistory, BattleKey, BattleRecord};
pub use ledger::{RewardSchedule, StreakLedger};
pub use registry::{CardData, CardRegistry, MemoryCardRegistry, MemoryTokenMint, TokenMint};

// The battle crate is half of the public surface; re-export it whole so
// downstream users depend on one crate.
pub use triad_battle as battle;
pub use triad_battle::{
    resolve_battle, AccountId, Ability, BattleEvent, BattleOutcome, BattleRng, Card, CardId, Deck,
    PriorityTable, Side, XorShiftRng, MAX_DECK_SIZE, ROULETTE_WIN_THRESHOLD,
};
