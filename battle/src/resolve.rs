//! Battle resolution
//!
//! [`resolve_battle`] is a pure function: two decks, a priority table and a
//! single percentile draw go in, a [`BattleOutcome`] comes out. No shared
//! state is touched, so any caller holding the same inputs can replay the
//! battle bit-for-bit.
//!
//! Cards are paired positionally into lanes. Ability effects apply across
//! all lanes in descending priority order *before* stats are compared, and
//! an earlier effect can preempt a later one: a card shielded at higher
//! priority can no longer be frozen. Roulette consumes the one draw of the
//! battle and, on a hit, ends it outright.

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::priority::PriorityTable;
use crate::types::{Ability, Card, Deck, MAX_DECK_SIZE};

/// A Roulette draw strictly below this wins the battle outright.
pub const ROULETTE_WIN_THRESHOLD: u8 = 10;

/// Which side of the battle an event or outcome refers to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

/// Ordered record of every ability effect applied during resolution.
///
/// The stream is part of the battle log, so history readers can audit why
/// a side won without re-running the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BattleEvent {
    /// A card raised its shield; it takes no damage and ignores later
    /// hostile effects this battle.
    #[serde(rename_all = "camelCase")]
    ShieldRaised { side: Side, lane: u8 },
    /// A Freeze landed: `side`'s card in `lane` deals no damage.
    #[serde(rename_all = "camelCase")]
    AttackFrozen { side: Side, lane: u8 },
    /// A Freeze fizzled against an already-shielded card.
    #[serde(rename_all = "camelCase")]
    FreezeBlocked { side: Side, lane: u8 },
    /// The battle's single draw was spent on a Roulette card.
    #[serde(rename_all = "camelCase")]
    RouletteSpin {
        side: Side,
        lane: u8,
        draw: u8,
        won: bool,
    },
    /// Aggregate totals after all ability effects, before the verdict.
    #[serde(rename_all = "camelCase")]
    Clash {
        challenger_health: u32,
        opponent_health: u32,
        challenger_attack: u32,
        opponent_attack: u32,
    },
    #[serde(rename_all = "camelCase")]
    BattleEnd { winner: Side },
}

/// Result of one resolved battle.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOutcome {
    pub winner: Side,
    /// The percentile draw fed into resolution (consumed by Roulette).
    pub draw: u8,
    pub events: Vec<BattleEvent>,
}

/// Per-lane combat state for one card while effects apply.
#[derive(Debug, Clone, Copy)]
struct LaneCard {
    card: Card,
    shielded: bool,
    frozen: bool,
}

impl LaneCard {
    fn new(card: Card) -> Self {
        Self {
            card,
            shielded: false,
            frozen: false,
        }
    }

    fn dealt_damage(&self) -> u32 {
        if self.frozen {
            0
        } else {
            self.card.attack as u32
        }
    }

    fn remaining_health(&self, incoming: u32) -> u32 {
        if self.shielded {
            self.card.health as u32
        } else {
            (self.card.health as u32).saturating_sub(incoming)
        }
    }
}

/// Both sides of one lane.
#[derive(Debug, Clone, Copy, Default)]
struct Lane {
    challenger: Option<LaneCard>,
    opponent: Option<LaneCard>,
}

impl Lane {
    fn get(&self, side: Side) -> Option<&LaneCard> {
        match side {
            Side::Challenger => self.challenger.as_ref(),
            Side::Opponent => self.opponent.as_ref(),
        }
    }

    fn get_mut(&mut self, side: Side) -> Option<&mut LaneCard> {
        match side {
            Side::Challenger => self.challenger.as_mut(),
            Side::Opponent => self.opponent.as_mut(),
        }
    }
}

/// Resolve a battle between two decks.
///
/// `draw` is the battle's single percentile draw; it is consumed by the
/// first Roulette card reached in resolution order and by nothing else.
/// Deck validation (size, ownership) is the orchestrator's job and has
/// already happened by the time this runs.
pub fn resolve_battle(
    challenger: &Deck,
    opponent: &Deck,
    priorities: &PriorityTable,
    draw: u8,
) -> BattleOutcome {
    let mut events = Vec::new();
    let mut lanes = [Lane::default(); MAX_DECK_SIZE];

    for (i, lane) in lanes.iter_mut().enumerate() {
        lane.challenger = challenger.lane(i).copied().map(LaneCard::new);
        lane.opponent = opponent.lane(i).copied().map(LaneCard::new);
    }

    log::debug!(
        "resolving battle: {} vs {} cards, draw {}",
        challenger.len(),
        opponent.len(),
        draw
    );

    let mut draw_spent = false;
    let mut instant_winner = None;

    // Apply ability effects highest priority first, scanning lanes in
    // order and the challenger side before the opponent side within each
    // lane. An effect resolved earlier can preempt a later one.
    'apply: for ability in priorities.resolution_order() {
        for lane_idx in 0..MAX_DECK_SIZE {
            for side in [Side::Challenger, Side::Opponent] {
                let holds = lanes[lane_idx]
                    .get(side)
                    .map(|lc| lc.card.ability == ability)
                    .unwrap_or(false);
                if !holds {
                    continue;
                }

                match ability {
                    Ability::Shield => {
                        if let Some(lc) = lanes[lane_idx].get_mut(side) {
                            lc.shielded = true;
                        }
                        events.push(BattleEvent::ShieldRaised {
                            side,
                            lane: lane_idx as u8,
                        });
                    }
                    Ability::Freeze => {
                        // Freeze disarms the card across the lane, unless
                        // that card already resolved its Shield.
                        let target = side.other();
                        if let Some(lc) = lanes[lane_idx].get_mut(target) {
                            if lc.shielded {
                                events.push(BattleEvent::FreezeBlocked {
                                    side: target,
                                    lane: lane_idx as u8,
                                });
                            } else {
                                lc.frozen = true;
                                events.push(BattleEvent::AttackFrozen {
                                    side: target,
                                    lane: lane_idx as u8,
                                });
                            }
                        }
                    }
                    Ability::Roulette => {
                        if draw_spent {
                            continue;
                        }
                        draw_spent = true;
                        let won = draw < ROULETTE_WIN_THRESHOLD;
                        events.push(BattleEvent::RouletteSpin {
                            side,
                            lane: lane_idx as u8,
                            draw,
                            won,
                        });
                        if won {
                            instant_winner = Some(side);
                            break 'apply;
                        }
                    }
                }
            }
        }
    }

    let winner = match instant_winner {
        Some(side) => side,
        None => decide_by_stats(&lanes, &mut events),
    };

    events.push(BattleEvent::BattleEnd { winner });
    log::debug!("battle decided: {:?} wins", winner);

    BattleOutcome {
        winner,
        draw,
        events,
    }
}

/// Compare aggregate effective health, then aggregate printed attack.
/// A full tie goes to the opponent: the caller picked the fight.
fn decide_by_stats(lanes: &[Lane; MAX_DECK_SIZE], events: &mut Vec<BattleEvent>) -> Side {
    let mut challenger_health = 0u32;
    let mut opponent_health = 0u32;
    let mut challenger_attack = 0u32;
    let mut opponent_attack = 0u32;

    for lane in lanes {
        let incoming_to_challenger = lane.opponent.map(|lc| lc.dealt_damage()).unwrap_or(0);
        let incoming_to_opponent = lane.challenger.map(|lc| lc.dealt_damage()).unwrap_or(0);

        if let Some(lc) = &lane.challenger {
            challenger_health += lc.remaining_health(incoming_to_challenger);
            challenger_attack += lc.card.attack as u32;
        }
        if let Some(lc) = &lane.opponent {
            opponent_health += lc.remaining_health(incoming_to_opponent);
            opponent_attack += lc.card.attack as u32;
        }
    }

    events.push(BattleEvent::Clash {
        challenger_health,
        opponent_health,
        challenger_attack,
        opponent_attack,
    });

    if challenger_health != opponent_health {
        if challenger_health > opponent_health {
            Side::Challenger
        } else {
            Side::Opponent
        }
    } else if challenger_attack > opponent_attack {
        Side::Challenger
    } else {
        Side::Opponent
    }
}
