//! Append-only battle history
//!
//! Every resolved battle lands here under a key any client can recompute
//! offline: keccak-256 over the SCALE encoding of `(player, timestamp,
//! nonce)`. Records are immutable once written; the only failure modes
//! are a key collision on write and a miss on read.

use alloc::collections::BTreeMap;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

use triad_battle::{AccountId, BattleOutcome, Deck};

use crate::error::{GameError, GameResult};

/// Collision-resistant identifier for one battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    TypeInfo,
    Serialize,
    Deserialize,
)]
pub struct BattleKey(pub [u8; 32]);

/// Derive the history key for `(player, timestamp, nonce)`.
///
/// Pure and side-effect-free: the value is bit-identical with the key the
/// store produced at write time for the same inputs, so clients can look
/// up battles without having observed the write.
pub fn battle_key(player: &AccountId, timestamp: u64, nonce: u64) -> BattleKey {
    let encoded = (player, timestamp, nonce).encode();
    let mut hasher = Keccak::v256();
    hasher.update(&encoded);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    BattleKey(out)
}

/// Everything recorded about one battle. Enough to reconstruct the
/// outcome, audit the ability effects, and recompute the key.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub player: AccountId,
    pub timestamp: u64,
    pub nonce: u64,
    pub challenger: Deck,
    pub opponent: Deck,
    pub outcome: BattleOutcome,
    /// Tokens credited to the player for this battle (zero on a loss).
    pub reward: u64,
    /// The player's win streak after this battle was applied.
    pub streak_after: u32,
}

/// The append-only log. Entries are never mutated or deleted.
#[derive(Debug, Clone, Default, Encode, Decode, TypeInfo)]
pub struct BattleHistory {
    entries: BTreeMap<BattleKey, BattleRecord>,
}

impl BattleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record already exists for this key.
    pub fn contains(&self, key: &BattleKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Append a record, returning the key it was filed under.
    ///
    /// With monotonic nonces a collision cannot happen, but the store
    /// still refuses to overwrite: history is immutable.
    pub fn record(&mut self, entry: BattleRecord) -> GameResult<BattleKey> {
        let key = battle_key(&entry.player, entry.timestamp, entry.nonce);
        if self.entries.contains_key(&key) {
            return Err(GameError::DuplicateBattleKey);
        }
        self.entries.insert(key, entry);
        Ok(key)
    }

    /// Look up a battle by key.
    pub fn get(&self, key: &BattleKey) -> GameResult<&BattleRecord> {
        self.entries.get(key).ok_or(GameError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
