//! Card registry and token mint capabilities
//!
//! The engine never stores cards or balances itself; it talks to these two
//! traits. In-memory implementations back the single-process deployment
//! and the test suite. Anything that persists cards elsewhere implements
//! the same traits and plugs straight into [`crate::engine::GameEngine`].

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use triad_battle::{AccountId, Ability, Card, CardId};

use crate::error::{GameError, GameResult};

/// Largest number of cards a single mint call may create.
pub const MAX_MINT_BATCH: usize = 8;

/// Raw card attributes as submitted to `mint_cards`, before validation.
/// `ability` is a raw discriminant, checked against [`Ability`] at mint
/// time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub attack: u8,
    pub health: u8,
    pub ability: u8,
}

/// Read access to card ownership and attributes.
pub trait CardRegistry {
    /// Current owner of `card`, if it exists.
    fn owner_of(&self, card: CardId) -> Option<AccountId>;

    /// Attributes of `card`, if it exists.
    fn card(&self, card: CardId) -> Option<Card>;
}

/// Fungible-token credit capability. Minting is the only operation the
/// game needs; a failure here aborts the whole battle.
pub trait TokenMint {
    fn mint_to(&mut self, to: &AccountId, amount: u64) -> GameResult<()>;
}

/// In-memory card registry with an admin and an authorized-minter set.
///
/// Card ids are sequential from zero, in mint order.
#[derive(Debug, Clone, Encode, Decode, TypeInfo)]
pub struct MemoryCardRegistry {
    admin: AccountId,
    minters: BTreeSet<AccountId>,
    cards: BTreeMap<CardId, Card>,
    owners: BTreeMap<CardId, AccountId>,
    next_id: u64,
}

impl MemoryCardRegistry {
    /// Create a registry administered by `admin`, who can also mint.
    pub fn new(admin: AccountId) -> Self {
        let mut minters = BTreeSet::new();
        minters.insert(admin);
        Self {
            admin,
            minters,
            cards: BTreeMap::new(),
            owners: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Authorize an additional minter. Admin only.
    pub fn add_minter(&mut self, caller: &AccountId, minter: AccountId) -> GameResult<()> {
        if *caller != self.admin {
            return Err(GameError::NotAuthorized);
        }
        self.minters.insert(minter);
        log::info!("minter added: {:?}", minter);
        Ok(())
    }

    /// Mint a batch of cards to `to`, returning the new ids in order.
    ///
    /// The whole batch is validated before anything is stored: a bad
    /// ability value or batch size leaves the registry untouched.
    pub fn mint_cards(
        &mut self,
        caller: &AccountId,
        to: &AccountId,
        data: &[CardData],
    ) -> GameResult<Vec<CardId>> {
        if !self.minters.contains(caller) {
            return Err(GameError::NotAuthorized);
        }
        if data.is_empty() || data.len() > MAX_MINT_BATCH {
            return Err(GameError::InvalidMintParams);
        }

        let mut validated = Vec::with_capacity(data.len());
        for entry in data {
            let ability =
                Ability::try_from(entry.ability).map_err(|_| GameError::InvalidMintParams)?;
            validated.push((entry.attack, entry.health, ability));
        }

        let mut ids = Vec::with_capacity(validated.len());
        for (attack, health, ability) in validated {
            let id = CardId(self.next_id);
            self.next_id += 1;
            self.cards.insert(id, Card { id, attack, health, ability });
            self.owners.insert(id, *to);
            ids.push(id);
        }
        log::info!("minted {} cards to {:?}", ids.len(), to);
        Ok(ids)
    }

    /// Transfer a card between accounts. Only the current owner may move it.
    pub fn transfer(&mut self, caller: &AccountId, to: &AccountId, card: CardId) -> GameResult<()> {
        match self.owners.get_mut(&card) {
            Some(owner) if owner == caller => {
                *owner = *to;
                Ok(())
            }
            Some(_) => Err(GameError::NotCardOwner { card }),
            None => Err(GameError::NotFound),
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

impl CardRegistry for MemoryCardRegistry {
    fn owner_of(&self, card: CardId) -> Option<AccountId> {
        self.owners.get(&card).copied()
    }

    fn card(&self, card: CardId) -> Option<Card> {
        self.cards.get(&card).copied()
    }
}

/// In-memory fungible-token balances. Mint-only; there is nothing in the
/// game that burns or transfers between players.
#[derive(Debug, Clone, Default, Encode, Decode, TypeInfo)]
pub struct MemoryTokenMint {
    balances: BTreeMap<AccountId, u64>,
}

impl MemoryTokenMint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, who: &AccountId) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }
}

impl TokenMint for MemoryTokenMint {
    fn mint_to(&mut self, to: &AccountId, amount: u64) -> GameResult<()> {
        let balance = self.balances.entry(*to).or_insert(0);
        *balance = balance.saturating_add(amount);
        log::debug!("minted {} tokens to {:?}", amount, to);
        Ok(())
    }
}
