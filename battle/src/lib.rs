#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod priority;
pub mod resolve;
pub mod rng;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{BattleError, BattleResult};
pub use priority::PriorityTable;
pub use resolve::{resolve_battle, BattleEvent, BattleOutcome, Side, ROULETTE_WIN_THRESHOLD};
pub use rng::{BattleRng, XorShiftRng};
pub use types::{AccountId, Ability, Card, CardId, Deck, MAX_DECK_SIZE};
