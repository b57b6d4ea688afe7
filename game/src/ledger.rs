//! Win-streak progression and reward tiers
//!
//! One counter per address: wins push it up by exactly one, a loss drops
//! it back to zero. The reward paid for a win depends only on the streak
//! value it produces.

use alloc::collections::BTreeMap;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use triad_battle::AccountId;

use crate::error::GameResult;
use crate::registry::TokenMint;

/// Pure mapping from a win's resulting streak value to a token amount.
///
/// A win whose streak is a positive multiple of `milestone_every` pays
/// `milestone_reward` instead of the base. Defaults: 100 per win, with
/// every fifth consecutive win paying 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSchedule {
    pub base_reward: u64,
    pub milestone_every: u32,
    pub milestone_reward: u64,
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            base_reward: 100,
            milestone_every: 5,
            milestone_reward: 1000,
        }
    }
}

impl RewardSchedule {
    /// Tokens paid for a win that brings the streak to `streak`.
    pub fn reward_for(&self, streak: u32) -> u64 {
        if self.milestone_every > 0 && streak % self.milestone_every == 0 {
            self.milestone_reward
        } else {
            self.base_reward
        }
    }
}

/// Per-address consecutive-win counters.
#[derive(Debug, Clone, Default, Encode, Decode, TypeInfo)]
pub struct StreakLedger {
    streaks: BTreeMap<AccountId, u32>,
}

impl StreakLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current streak for `who`; unknown addresses are at zero.
    pub fn win_streak(&self, who: &AccountId) -> u32 {
        self.streaks.get(who).copied().unwrap_or(0)
    }

    /// Record a battle outcome for `who` and pay out through `mint`.
    ///
    /// Returns the reward amount (zero on a loss). The streak is only
    /// committed after the mint succeeds, so a mint failure leaves the
    /// ledger exactly as it was.
    pub fn record_outcome<M: TokenMint>(
        &mut self,
        mint: &mut M,
        schedule: &RewardSchedule,
        who: &AccountId,
        won: bool,
    ) -> GameResult<u64> {
        if !won {
            self.streaks.insert(*who, 0);
            return Ok(0);
        }

        let streak = self.win_streak(who).saturating_add(1);
        let reward = schedule.reward_for(streak);
        mint.mint_to(who, reward)?;
        self.streaks.insert(*who, streak);
        log::debug!("streak for {:?} now {}, paid {}", who, streak, reward);
        Ok(reward)
    }
}
