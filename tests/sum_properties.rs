
//! Algebraic laws of sum addition and quotient division, checked over
//! generated sums.

use lol_match_stats::models::{MatchQuotient, MatchSum, Scalars, Subscalars};
use proptest::collection::hash_map;
use proptest::prelude::*;

fn arb_subscalars() -> impl Strategy<Value = Subscalars> {
    (0u64..10_000, 0u64..10_000).prop_map(|(plays, wins)| Subscalars { plays, wins })
}

fn arb_scalars() -> impl Strategy<Value = Scalars> {
    (0u64..1_000_000, 0u64..1_000_000, 0u64..1_000_000, 0u64..1_000_000)
        .prop_map(|(plays, wins, kills, gold_earned)| {
            let mut scalars = Scalars::default();
            scalars.plays = plays;
            scalars.wins = wins;
            scalars.kills = kills;
            scalars.gold_earned = gold_earned;
            scalars
        })
}

// delta buckets stay integer-valued so float addition is exact and the
// associativity law can use strict equality
fn arb_sum() -> impl Strategy<Value = MatchSum> {
    (
        arb_scalars(),
        (0u32..1_000_000u32, 0u32..1_000_000u32),
        (0u64..1_000, 0u64..1_000),
        hash_map("[0-9]{3,4}:1:[0-5]", arb_subscalars(), 0..4),
        hash_map(3340u32..3364, arb_subscalars(), 0..4),
    ).prop_map(|(scalars, (cs, xp), (short, long), runes, trinkets)| {
        let mut sum = MatchSum::default();
        sum.scalars = scalars;
        sum.deltas.cs_diff.zero_to_ten = cs as f64;
        sum.deltas.xp_diff.thirty_to_end = xp as f64;
        sum.duration_distribution.zero_to_ten = short;
        sum.duration_distribution.thirty_to_end = long;
        sum.runes = runes;
        sum.trinkets = trinkets;
        sum
    })
}

proptest! {

    #[test]
    fn addition_commutes(a in arb_sum(), b in arb_sum()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn addition_associates(a in arb_sum(), b in arb_sum(), c in arb_sum()) {
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a + (b + c),
        );
    }

    #[test]
    fn zero_sum_is_identity(a in arb_sum()) {
        prop_assert_eq!(a.clone() + MatchSum::default(), a);
    }

    #[test]
    fn quotient_scalars_divide_by_plays(a in arb_sum()) {
        let quot = MatchQuotient::from_sum(&a);

        if a.scalars.plays == 0 {
            prop_assert_eq!(quot.scalars.wins, 0.0);
            prop_assert_eq!(quot.scalars.kills, 0.0);
        } else {
            let plays = a.scalars.plays as f64;
            prop_assert!((quot.scalars.wins - a.scalars.wins as f64 / plays).abs() < 1e-12);
            prop_assert!((quot.scalars.kills - a.scalars.kills as f64 / plays).abs() < 1e-12);
            prop_assert!(
                (quot.scalars.gold_earned - a.scalars.gold_earned as f64 / plays).abs() < 1e-12);
            prop_assert_eq!(quot.scalars.plays, plays);
        }
    }

    #[test]
    fn quotient_never_produces_nan(a in arb_sum()) {
        let quot = MatchQuotient::from_sum(&a);
        prop_assert!(quot.scalars.wins.is_finite());
        prop_assert!(quot.deltas.cs_diff.zero_to_ten.is_finite());
        for stats in quot.runes.values() {
            prop_assert!(stats.wins.is_finite());
        }
    }
}

#[test]
fn quotient_of_the_zero_sum_is_zero() {
    let quot = MatchQuotient::from_sum(&MatchSum::default());
    assert_eq!(quot, MatchQuotient::default());
}
