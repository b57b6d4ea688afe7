//! The game engine: validation, resolution, progression, history
//!
//! [`GameEngine`] is the single owner of all mutable game state (priority
//! table, streak ledger, battle history) and of the two external
//! capabilities (card registry, token mint). Every mutating operation
//! takes `&mut self`, so calls are serialized by construction: a battle
//! either completes fully or fails having changed nothing observable.
//!
//! There is no side channel for events. Each operation returns a record
//! describing what happened, and subscribers consume those.

use alloc::boxed::Box;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use triad_battle::{
    resolve_battle, AccountId, Ability, BattleOutcome, BattleRng, CardId, Deck, PriorityTable,
    Side, XorShiftRng, MAX_DECK_SIZE,
};

use crate::env::{Clock, SeedSource};
use crate::error::{GameError, GameResult};
use crate::history::{BattleHistory, BattleKey, BattleRecord};
use crate::ledger::{RewardSchedule, StreakLedger};
use crate::opponents::derive_opponent_deck;
use crate::registry::{CardRegistry, TokenMint};

/// Tokens credited to an account as part of a battle result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    pub to: AccountId,
    pub amount: u64,
}

/// Result record of one `battle` call.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    /// History key; `battle_key(player, timestamp, nonce)` recomputes it.
    pub key: BattleKey,
    pub player: AccountId,
    pub winner: Side,
    pub timestamp: u64,
    pub nonce: u64,
    /// Tokens paid out for this battle (zero on a loss).
    pub reward: u64,
    /// Present iff tokens were minted.
    pub transfer: Option<TokenTransfer>,
    /// The player's streak after this battle.
    pub streak: u32,
    pub outcome: BattleOutcome,
}

/// Result record of a successful `assign_priority` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityAssigned {
    pub ability: Ability,
    pub priority: u8,
}

/// The orchestrator. Generic over the two external capabilities; clock
/// and seed source are injected behind trait objects.
pub struct GameEngine<C: CardRegistry, M: TokenMint> {
    cards: C,
    tokens: M,
    admin: AccountId,
    priorities: PriorityTable,
    schedule: RewardSchedule,
    ledger: StreakLedger,
    history: BattleHistory,
    clock: Box<dyn Clock>,
    seeds: Box<dyn SeedSource>,
    seed_override: Option<u64>,
    next_nonce: u64,
}

impl<C: CardRegistry, M: TokenMint> GameEngine<C, M> {
    /// Create an engine with production clock and entropy.
    #[cfg(feature = "std")]
    pub fn new(cards: C, tokens: M, admin: AccountId) -> Self {
        Self::with_env(
            cards,
            tokens,
            admin,
            Box::new(crate::env::SystemClock),
            Box::new(crate::env::EntropySeed::new()),
        )
    }

    /// Create an engine with explicit clock and seed source.
    pub fn with_env(
        cards: C,
        tokens: M,
        admin: AccountId,
        clock: Box<dyn Clock>,
        seeds: Box<dyn SeedSource>,
    ) -> Self {
        Self {
            cards,
            tokens,
            admin,
            priorities: PriorityTable::new(),
            schedule: RewardSchedule::default(),
            ledger: StreakLedger::new(),
            history: BattleHistory::new(),
            clock,
            seeds,
            seed_override: None,
            next_nonce: 0,
        }
    }

    /// Fight the caller's chosen cards against a derived opponent deck.
    ///
    /// Validation happens before any mutation: deck size, then ownership
    /// of every card, then the (unreachable under monotonic nonces) key
    /// collision check. After that the battle is committed atomically --
    /// a mint failure propagates out before ledger or history change.
    pub fn battle(&mut self, caller: &AccountId, card_ids: &[CardId]) -> GameResult<BattleReport> {
        log::debug!("battle: {:?} fields {} cards", caller, card_ids.len());

        if card_ids.len() > MAX_DECK_SIZE {
            return Err(GameError::TooManyCards {
                len: card_ids.len() as u32,
            });
        }

        let mut picked = Vec::with_capacity(card_ids.len());
        for &id in card_ids {
            match self.cards.owner_of(id) {
                Some(owner) if owner == *caller => {}
                _ => return Err(GameError::NotCardOwner { card: id }),
            }
            let card = self.cards.card(id).ok_or(GameError::NotFound)?;
            picked.push(card);
        }
        let challenger = Deck::new(picked)?;

        let seed = match self.seed_override.take() {
            Some(seed) => seed,
            None => self.seeds.next_seed(caller, b"battle"),
        };
        let mut rng = XorShiftRng::seed_from_u64(seed);
        // The battle's single percentile draw comes first off the seed,
        // then the opponent derivation consumes the rest.
        let draw = rng.draw_percent();
        let opponent = derive_opponent_deck(&mut rng)?;

        let timestamp = self.clock.now();
        let nonce = self.next_nonce;
        let key = crate::history::battle_key(caller, timestamp, nonce);
        if self.history.contains(&key) {
            return Err(GameError::DuplicateBattleKey);
        }

        let outcome = resolve_battle(&challenger, &opponent, &self.priorities, draw);
        let won = outcome.winner == Side::Challenger;

        let reward = self
            .ledger
            .record_outcome(&mut self.tokens, &self.schedule, caller, won)?;
        self.next_nonce += 1;
        let streak = self.ledger.win_streak(caller);

        let record = BattleRecord {
            player: *caller,
            timestamp,
            nonce,
            challenger,
            opponent,
            outcome: outcome.clone(),
            reward,
            streak_after: streak,
        };
        let key = self.history.record(record)?;

        log::info!(
            "battle {:?}: winner {:?}, reward {}, streak {}",
            caller,
            outcome.winner,
            reward,
            streak
        );

        Ok(BattleReport {
            key,
            player: *caller,
            winner: outcome.winner,
            timestamp,
            nonce,
            reward,
            transfer: (reward > 0).then_some(TokenTransfer {
                to: *caller,
                amount: reward,
            }),
            streak,
            outcome,
        })
    }

    /// Assign a resolution priority to an ability. Admin only.
    pub fn assign_priority(
        &mut self,
        caller: &AccountId,
        ability: Ability,
        priority: u8,
    ) -> GameResult<PriorityAssigned> {
        if *caller != self.admin {
            return Err(GameError::NotAuthorized);
        }
        self.priorities.assign(ability, priority)?;
        log::info!("priority set: {:?} -> {}", ability, priority);
        Ok(PriorityAssigned { ability, priority })
    }

    /// Replace the reward schedule. Admin only.
    pub fn set_reward_schedule(
        &mut self,
        caller: &AccountId,
        schedule: RewardSchedule,
    ) -> GameResult<()> {
        if *caller != self.admin {
            return Err(GameError::NotAuthorized);
        }
        self.schedule = schedule;
        Ok(())
    }

    /// Pin the next battle's seed. The override is consumed by exactly
    /// one battle, then entropy resumes. Replay/test surface.
    pub fn set_random_seed(&mut self, seed: u64) {
        self.seed_override = Some(seed);
    }

    /// Current priority of `ability`. Never fails.
    pub fn priority_of(&self, ability: Ability) -> u8 {
        self.priorities.priority_of(ability)
    }

    /// Current win streak of `who`; zero for unknown addresses.
    pub fn win_streak(&self, who: &AccountId) -> u32 {
        self.ledger.win_streak(who)
    }

    /// Look up a recorded battle.
    pub fn battle_details(&self, key: &BattleKey) -> GameResult<&BattleRecord> {
        self.history.get(key)
    }

    pub fn registry(&self) -> &C {
        &self.cards
    }

    pub fn registry_mut(&mut self) -> &mut C {
        &mut self.cards
    }

    pub fn tokens(&self) -> &M {
        &self.tokens
    }
}
