use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{BattleError, BattleResult};

/// Maximum number of cards a side may field in one battle.
pub const MAX_DECK_SIZE: usize = 3;

/// Opaque account address.
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
    MaxEncodedLen,
    TypeInfo,
    Serialize,
    Deserialize,
)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Address with every byte set to `byte`. Handy for fixtures.
    pub fn repeat(byte: u8) -> Self {
        Self([byte; 32])
    }
}

/// Unique identifier for cards
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
    MaxEncodedLen,
    TypeInfo,
    Serialize,
    Deserialize,
)]
pub struct CardId(pub u64);

/// The fixed set of card abilities.
///
/// Declaration order doubles as the tie-break order when two abilities end
/// up with equal resolution priority.
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
    MaxEncodedLen,
    TypeInfo,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    /// The shielded card takes no damage this battle.
    Shield,
    /// One-in-ten gamble: win the battle outright, ignoring stats.
    Roulette,
    /// The card opposite a Freeze card deals no damage this battle.
    Freeze,
}

impl Ability {
    /// All abilities, in declaration order.
    pub const ALL: [Ability; 3] = [Ability::Shield, Ability::Roulette, Ability::Freeze];
}

impl TryFrom<u8> for Ability {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0 => Ok(Ability::Shield),
            1 => Ok(Ability::Roulette),
            2 => Ok(Ability::Freeze),
            _ => Err(()),
        }
    }
}

/// A battle-ready card. Attributes are validated at mint time by the
/// registry; the engine treats them as trusted input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    MaxEncodedLen,
    TypeInfo,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub attack: u8,
    pub health: u8,
    pub ability: Ability,
}

impl Card {
    pub fn new(id: u64, attack: u8, health: u8, ability: Ability) -> Self {
        Self {
            id: CardId(id),
            attack,
            health,
            ability,
        }
    }
}

/// The ordered cards one side fields in a battle, at most [`MAX_DECK_SIZE`].
///
/// Position is meaningful: card `i` fights in lane `i`. Sides with fewer
/// than [`MAX_DECK_SIZE`] cards leave the trailing lanes empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> BattleResult<Self> {
        if cards.len() > MAX_DECK_SIZE {
            return Err(BattleError::DeckTooLarge {
                len: cards.len() as u32,
            });
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card fighting in lane `lane`, if the deck reaches that far.
    pub fn lane(&self, lane: usize) -> Option<&Card> {
        self.cards.get(lane)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
