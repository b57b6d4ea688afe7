//! Error types for battle resolution and configuration
//!
//! Plain enums instead of String-based errors so callers embedding the
//! engine in constrained (no_std) environments get structured failures.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::types::Ability;

/// Errors raised by the battle crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum BattleError {
    /// The priority value is already held by a different ability
    InvalidAbilityPriority { priority: u8, held_by: Ability },
    /// A deck was built with more cards than a side may field
    DeckTooLarge { len: u32 },
}

/// Result type alias for battle operations
pub type BattleResult<T> = Result<T, BattleError>;
