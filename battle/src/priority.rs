//! Admin-configured resolution order over abilities
//!
//! Abilities resolve from highest to lowest priority. Each priority value
//! may be held by at most one ability; unset abilities fall back to a
//! built-in default order.

use alloc::collections::BTreeMap;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::error::{BattleError, BattleResult};
use crate::types::Ability;

/// Total order over ability kinds, controlling effect application order
/// inside [`crate::resolve::resolve_battle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct PriorityTable {
    assigned: BTreeMap<Ability, u8>,
}

impl PriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default priority for an ability with no explicit assignment.
    ///
    /// Shield outranks Roulette outranks Freeze, so a shielded card is
    /// already immune before the opposing Freeze resolves.
    pub fn default_priority(ability: Ability) -> u8 {
        match ability {
            Ability::Shield => 3,
            Ability::Roulette => 2,
            Ability::Freeze => 1,
        }
    }

    /// Assign `priority` to `ability`.
    ///
    /// Re-assigning an ability's own slot overwrites it; claiming a value
    /// held by a *different* ability is rejected.
    pub fn assign(&mut self, ability: Ability, priority: u8) -> BattleResult<()> {
        if let Some((&held_by, _)) = self
            .assigned
            .iter()
            .find(|(&a, &p)| p == priority && a != ability)
        {
            return Err(BattleError::InvalidAbilityPriority { priority, held_by });
        }
        self.assigned.insert(ability, priority);
        Ok(())
    }

    /// Current priority of `ability`. Never fails.
    pub fn priority_of(&self, ability: Ability) -> u8 {
        self.assigned
            .get(&ability)
            .copied()
            .unwrap_or_else(|| Self::default_priority(ability))
    }

    /// All abilities sorted by descending priority, ties broken by
    /// declaration order.
    pub fn resolution_order(&self) -> [Ability; 3] {
        let mut order = Ability::ALL;
        // Stable sort keeps declaration order for equal priorities.
        order.sort_by(|a, b| self.priority_of(*b).cmp(&self.priority_of(*a)));
        order
    }
}
