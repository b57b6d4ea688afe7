use super::*;
use crate::resolve::{Side, ROULETTE_WIN_THRESHOLD};

#[test]
fn test_shield_beats_equal_stats() {
    // SCENARIO:
    // Challenger: 1/1 Shield. Opponent: 1/1 Freeze.
    // Shield resolves first (default priority), so the later Freeze
    // fizzles against the shielded card. The challenger takes no damage
    // but still deals 1, leaving totals 1 vs 0.

    let challenger = deck(&[card(1, 1, 1, Ability::Shield)]);
    let opponent = deck(&[card(2, 1, 1, Ability::Freeze)]);

    let outcome = run_battle(&challenger, &opponent, 50);

    assert_eq!(outcome.winner, Side::Challenger);
    assert_eq!(
        effect_events(&outcome),
        alloc::vec![
            BattleEvent::ShieldRaised {
                side: Side::Challenger,
                lane: 0,
            },
            BattleEvent::FreezeBlocked {
                side: Side::Challenger,
                lane: 0,
            },
        ]
    );
}

#[test]
fn test_mutual_freeze_tie_breaks_on_health() {
    // SCENARIO:
    // Challenger: 1/2 Freeze. Opponent: 1/1 Freeze.
    // Both attacks are frozen, nobody deals damage, and the higher
    // remaining health wins.

    let challenger = deck(&[card(1, 1, 2, Ability::Freeze)]);
    let opponent = deck(&[card(2, 1, 1, Ability::Freeze)]);

    let outcome = run_battle(&challenger, &opponent, 50);

    assert_eq!(outcome.winner, Side::Challenger);
    assert_eq!(
        effect_events(&outcome),
        alloc::vec![
            // Challenger side resolves first within the lane, freezing the
            // opponent's card before the mirror effect lands.
            BattleEvent::AttackFrozen {
                side: Side::Opponent,
                lane: 0,
            },
            BattleEvent::AttackFrozen {
                side: Side::Challenger,
                lane: 0,
            },
        ]
    );
}

#[test]
fn test_roulette_forced_win_ignores_stats() {
    // SCENARIO:
    // A hopeless 1/1 Roulette card against a 255/101 Freeze wall. With
    // the draw forced below the threshold the gamble pays out and stats
    // never enter the picture.

    let challenger = deck(&[card(1, 1, 1, Ability::Roulette)]);
    let opponent = deck(&[card(2, 255, 101, Ability::Freeze)]);

    let outcome = run_battle(&challenger, &opponent, ROULETTE_WIN_THRESHOLD - 1);

    assert_eq!(outcome.winner, Side::Challenger);
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::RouletteSpin { won: true, .. })));
    // Short-circuited battles never reach the stat comparison.
    assert!(!outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::Clash { .. })));
}

#[test]
fn test_roulette_miss_at_threshold_falls_back_to_stats() {
    // Same fight, but the draw lands exactly on the threshold: a miss.
    let challenger = deck(&[card(1, 1, 1, Ability::Roulette)]);
    let opponent = deck(&[card(2, 255, 101, Ability::Freeze)]);

    let outcome = run_battle(&challenger, &opponent, ROULETTE_WIN_THRESHOLD);

    assert_eq!(outcome.winner, Side::Opponent);
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::RouletteSpin { won: false, .. })));
}

#[test]
fn test_single_draw_consumed_by_first_roulette() {
    // Two Roulette cards on opposite sides. Only one spin may happen,
    // and within equal priority the challenger side claims it.
    let challenger = deck(&[card(1, 1, 1, Ability::Roulette)]);
    let opponent = deck(&[card(2, 9, 9, Ability::Roulette)]);

    let outcome = run_battle(&challenger, &opponent, 0);

    assert_eq!(outcome.winner, Side::Challenger);
    let spins: Vec<_> = outcome
        .events
        .iter()
        .filter(|e| matches!(e, BattleEvent::RouletteSpin { .. }))
        .collect();
    assert_eq!(spins.len(), 1);
    assert!(matches!(
        spins[0],
        BattleEvent::RouletteSpin {
            side: Side::Challenger,
            ..
        }
    ));
}

#[test]
fn test_short_deck_lanes_are_zero_padded() {
    // A lone 2/5 card against three 1/1s. Only lane 0 exchanges damage;
    // the unopposed lanes contribute their full health.
    let challenger = deck(&[card(1, 2, 5, Ability::Freeze)]);
    let opponent = deck(&[
        card(10, 1, 1, Ability::Freeze),
        card(11, 1, 1, Ability::Freeze),
        card(12, 1, 1, Ability::Freeze),
    ]);

    let outcome = run_battle(&challenger, &opponent, 50);

    // Mutual lane-0 freezes cancel the exchange there; lanes 1 and 2 have
    // no challenger card to freeze or to hit. Totals: 5 vs 3.
    assert_eq!(outcome.winner, Side::Challenger);
    let clash = outcome
        .events
        .iter()
        .find(|e| matches!(e, BattleEvent::Clash { .. }))
        .expect("stat battles record a clash");
    assert_eq!(
        *clash,
        BattleEvent::Clash {
            challenger_health: 5,
            opponent_health: 3,
            challenger_attack: 2,
            opponent_attack: 3,
        }
    );
}

#[test]
fn test_plain_damage_exchange() {
    // No ability interactions that matter: 3/4 vs 2/6 in one lane, with
    // shields on cards that take no damage anyway staying inert.
    let challenger = deck(&[card(1, 3, 4, Ability::Shield)]);
    let opponent = deck(&[card(2, 2, 6, Ability::Shield)]);

    let outcome = run_battle(&challenger, &opponent, 50);

    // Both shields block all damage, so totals are the printed 4 vs 6
    // and the opponent wins on health.
    assert_eq!(outcome.winner, Side::Opponent);
}

#[test]
fn test_full_tie_goes_to_opponent() {
    // Identical cards, no draw hit: health ties, attack ties, and the
    // deterministic default hands the battle to the opponent.
    let challenger = deck(&[card(1, 2, 2, Ability::Freeze)]);
    let opponent = deck(&[card(2, 2, 2, Ability::Freeze)]);

    let outcome = run_battle(&challenger, &opponent, 50);

    assert_eq!(outcome.winner, Side::Opponent);
}

#[test]
fn test_attack_tie_break_uses_printed_attack() {
    // Mutual freeze zeroes the dealt damage, health ties at 3 vs 3, and
    // the printed attack totals (5 vs 2) still separate the sides.
    let challenger = deck(&[card(1, 5, 3, Ability::Freeze)]);
    let opponent = deck(&[card(2, 2, 3, Ability::Freeze)]);

    let outcome = run_battle(&challenger, &opponent, 50);

    assert_eq!(outcome.winner, Side::Challenger);
}

#[test]
fn test_overkill_damage_saturates_at_zero() {
    // 200 attack into a 3-health card must not underflow the totals.
    let challenger = deck(&[card(1, 200, 10, Ability::Freeze)]);
    let opponent = deck(&[card(2, 1, 3, Ability::Shield)]);

    let outcome = run_battle(&challenger, &opponent, 50);

    // Opponent is shielded, keeps 3; challenger is frozen? No: the
    // opponent card is Shield, not Freeze, so the challenger keeps its
    // attack but the shield blocks it. Challenger takes 1, ending 9 vs 3.
    assert_eq!(outcome.winner, Side::Challenger);

    // Now without the shield: saturation must floor the defender at 0.
    // (Roulette on a missed draw leaves the exchange untouched.)
    let opponent = deck(&[card(3, 1, 3, Ability::Roulette)]);
    let outcome = run_battle(&challenger, &opponent, 50);
    let clash = outcome
        .events
        .iter()
        .find(|e| matches!(e, BattleEvent::Clash { .. }))
        .expect("stat battles record a clash");
    match clash {
        BattleEvent::Clash {
            opponent_health, ..
        } => assert_eq!(*opponent_health, 0),
        _ => unreachable!(),
    }
}

#[test]
fn test_outcome_replays_deterministically() {
    let challenger = deck(&[
        card(1, 3, 4, Ability::Shield),
        card(2, 2, 2, Ability::Roulette),
    ]);
    let opponent = deck(&[card(10, 4, 3, Ability::Freeze), card(11, 1, 5, Ability::Shield)]);

    let first = run_battle(&challenger, &opponent, 42);
    let second = run_battle(&challenger, &opponent, 42);

    assert_eq!(first, second);
}

#[test]
fn test_deck_rejects_more_than_three_cards() {
    let cards = alloc::vec![
        card(1, 1, 1, Ability::Shield),
        card(2, 1, 1, Ability::Shield),
        card(3, 1, 1, Ability::Shield),
        card(4, 1, 1, Ability::Shield),
    ];

    assert_eq!(
        Deck::new(cards),
        Err(crate::error::BattleError::DeckTooLarge { len: 4 })
    );
}
