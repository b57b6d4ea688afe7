//! Error types for game operations
//!
//! Every rejected operation surfaces a distinguishable variant, and all
//! validation failures are raised before any state is mutated.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use triad_battle::{BattleError, CardId};

/// Game errors that can occur while orchestrating battles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameError {
    /// Caller lacks the required role (admin or minter)
    NotAuthorized,
    /// Malformed mint input: bad batch size or out-of-range ability value
    InvalidMintParams,
    /// The priority value is already held by a different ability
    InvalidAbilityPriority { priority: u8 },
    /// More cards submitted than a deck may hold
    TooManyCards { len: u32 },
    /// Caller does not own this card
    NotCardOwner { card: CardId },
    /// Lookup missed: unknown card or battle key
    NotFound,
    /// A battle record already exists under this key
    DuplicateBattleKey,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

impl From<BattleError> for GameError {
    fn from(err: BattleError) -> Self {
        match err {
            BattleError::InvalidAbilityPriority { priority, .. } => {
                GameError::InvalidAbilityPriority { priority }
            }
            BattleError::DeckTooLarge { len } => GameError::TooManyCards { len },
        }
    }
}
