
// external uses
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

// my mods
use crate::models::sum::{Delta, DurationDistribution, MatchSum, Subscalars};

/// A `MatchSum` divided through into per-play rates. `plays` stays an
/// absolute count since the pick rate math downstream still needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchQuotient {
    pub scalars : QuotientScalars,
    pub deltas : QuotientDeltas,

    pub masteries : HashMap<String, QuotientSubscalars>,
    pub runes : HashMap<String, QuotientSubscalars>,
    pub keystones : HashMap<String, QuotientSubscalars>,
    pub summoners : HashMap<String, QuotientSubscalars>,
    pub skill_orders : HashMap<String, QuotientSubscalars>,
    pub starter_items : HashMap<String, QuotientSubscalars>,
    pub build_path : HashMap<String, QuotientSubscalars>,
    pub core_build_list : HashMap<String, QuotientSubscalars>,

    pub trinkets : HashMap<u32, QuotientSubscalars>,
    pub durations : HashMap<u32, QuotientSubscalars>,
    pub bans : HashMap<u32, QuotientSubscalars>,
    pub allies : HashMap<u32, QuotientSubscalars>,
    pub enemies : HashMap<u32, QuotientSubscalars>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct QuotientScalars {
    pub plays : f64,
    pub wins : f64,
    pub gold_earned : f64,
    pub kills : f64,
    pub deaths : f64,
    pub assists : f64,
    pub damage_dealt : f64,
    pub damage_taken : f64,
    pub minions_killed : f64,
    pub team_jungle_minions_killed : f64,
    pub enemy_jungle_minions_killed : f64,
    pub structure_damage : f64,
    pub killing_spree : f64,
    pub wards_bought : f64,
    pub wards_placed : f64,
    pub wards_killed : f64,
    pub crowd_control : f64,
    pub first_blood : f64,
    pub first_blood_assist : f64,
    pub doublekills : f64,
    pub triplekills : f64,
    pub quadrakills : f64,
    pub pentakills : f64,
    pub physical_damage : f64,
    pub magic_damage : f64,
    pub true_damage : f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct QuotientDeltas {
    pub cs_diff : QuotientDelta,
    pub xp_diff : QuotientDelta,
    pub damage_taken_diff : QuotientDelta,
    pub xp_per_min : QuotientDelta,
    pub gold_per_min : QuotientDelta,
    pub towers_per_min : QuotientDelta,
    pub wards_placed : QuotientDelta,
    pub damage_taken : QuotientDelta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct QuotientDelta {
    pub zero_to_ten : f64,
    pub ten_to_twenty : f64,
    pub twenty_to_thirty : f64,
    pub thirty_to_end : f64,
}

/// Per-key rates: `plays` is the fraction of the champion's games the key
/// was seen in, `wins` the win rate within those games, and `play_count`
/// the raw count behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct QuotientSubscalars {
    pub plays : f64,
    pub wins : f64,
    pub play_count : u64,
}

impl MatchQuotient {

    /// Divides an aggregated sum into rates. Zero denominators yield zero
    /// rates rather than NaN, so a cohort entry with no plays stays inert
    /// through the statistics pass.
    pub fn from_sum(sum : &MatchSum) -> MatchQuotient {
        let scalars = &sum.scalars;
        let plays = scalars.plays as f64;
        let dd = &sum.duration_distribution;

        MatchQuotient {
            scalars : QuotientScalars {
                plays,
                wins : ratio(scalars.wins as f64, plays),
                gold_earned : ratio(scalars.gold_earned as f64, plays),
                kills : ratio(scalars.kills as f64, plays),
                deaths : ratio(scalars.deaths as f64, plays),
                assists : ratio(scalars.assists as f64, plays),
                damage_dealt : ratio(scalars.damage_dealt as f64, plays),
                damage_taken : ratio(scalars.damage_taken as f64, plays),
                minions_killed : ratio(scalars.minions_killed as f64, plays),
                team_jungle_minions_killed : ratio(scalars.team_jungle_minions_killed as f64, plays),
                enemy_jungle_minions_killed : ratio(scalars.enemy_jungle_minions_killed as f64, plays),
                structure_damage : ratio(scalars.structure_damage as f64, plays),
                killing_spree : ratio(scalars.killing_spree as f64, plays),
                wards_bought : ratio(scalars.wards_bought as f64, plays),
                wards_placed : ratio(scalars.wards_placed as f64, plays),
                wards_killed : ratio(scalars.wards_killed as f64, plays),
                crowd_control : ratio(scalars.crowd_control as f64, plays),
                first_blood : ratio(scalars.first_blood as f64, plays),
                first_blood_assist : ratio(scalars.first_blood_assist as f64, plays),
                doublekills : ratio(scalars.doublekills as f64, plays),
                triplekills : ratio(scalars.triplekills as f64, plays),
                quadrakills : ratio(scalars.quadrakills as f64, plays),
                pentakills : ratio(scalars.pentakills as f64, plays),
                physical_damage : ratio(scalars.physical_damage as f64, plays),
                magic_damage : ratio(scalars.magic_damage as f64, plays),
                true_damage : ratio(scalars.true_damage as f64, plays),
            },
            deltas : QuotientDeltas {
                cs_diff : quotient_delta(&sum.deltas.cs_diff, dd),
                xp_diff : quotient_delta(&sum.deltas.xp_diff, dd),
                damage_taken_diff : quotient_delta(&sum.deltas.damage_taken_diff, dd),
                xp_per_min : quotient_delta(&sum.deltas.xp_per_min, dd),
                gold_per_min : quotient_delta(&sum.deltas.gold_per_min, dd),
                towers_per_min : quotient_delta(&sum.deltas.towers_per_min, dd),
                wards_placed : quotient_delta(&sum.deltas.wards_placed, dd),
                damage_taken : quotient_delta(&sum.deltas.damage_taken, dd),
            },
            masteries : quotient_subscalar_map(&sum.masteries, plays),
            runes : quotient_subscalar_map(&sum.runes, plays),
            keystones : quotient_subscalar_map(&sum.keystones, plays),
            summoners : quotient_subscalar_map(&sum.summoners, plays),
            skill_orders : quotient_subscalar_map(&sum.skill_orders, plays),
            starter_items : quotient_subscalar_map(&sum.starter_items, plays),
            build_path : quotient_subscalar_map(&sum.build_path, plays),
            core_build_list : quotient_subscalar_map(&sum.core_build_list, plays),
            trinkets : quotient_subscalar_map(&sum.trinkets, plays),
            durations : quotient_subscalar_map(&sum.durations, plays),
            bans : quotient_subscalar_map(&sum.bans, plays),
            allies : quotient_subscalar_map(&sum.allies, plays),
            enemies : quotient_subscalar_map(&sum.enemies, plays),
        }
    }
}

/// Division with the zero-denominator rule: anything over zero is zero.
pub(crate) fn ratio(numerator : f64, denominator : f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn quotient_delta(delta : &Delta, dd : &DurationDistribution) -> QuotientDelta {
    QuotientDelta {
        zero_to_ten : ratio(delta.zero_to_ten, dd.zero_to_ten as f64),
        ten_to_twenty : ratio(delta.ten_to_twenty, dd.ten_to_twenty as f64),
        twenty_to_thirty : ratio(delta.twenty_to_thirty, dd.twenty_to_thirty as f64),
        thirty_to_end : ratio(delta.thirty_to_end, dd.thirty_to_end as f64),
    }
}

fn quotient_subscalars(ss : &Subscalars, plays : f64) -> QuotientSubscalars {
    QuotientSubscalars {
        plays : ratio(ss.plays as f64, plays),
        wins : ratio(ss.wins as f64, ss.plays as f64),
        play_count : ss.plays,
    }
}

fn quotient_subscalar_map<K>(
    ss : &HashMap<K, Subscalars>, plays : f64) -> HashMap<K, QuotientSubscalars>
    where K : Eq + Hash + Clone {

    ss.iter()
        .map(|(key, s)| (key.clone(), quotient_subscalars(s, plays)))
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn divides_scalars_by_plays() {
        let mut sum = MatchSum::default();
        sum.scalars.plays = 4;
        sum.scalars.wins = 3;
        sum.scalars.kills = 8;
        sum.scalars.deaths = 4;
        sum.duration_distribution.zero_to_ten = 10;
        sum.deltas.cs_diff.zero_to_ten = 100.0;

        let quot = MatchQuotient::from_sum(&sum);
        assert_eq!(quot.scalars.plays, 4.0);
        assert_eq!(quot.scalars.wins, 0.75);
        assert_eq!(quot.scalars.kills, 2.0);
        assert_eq!(quot.scalars.deaths, 1.0);
        assert_eq!(quot.deltas.cs_diff.zero_to_ten, 10.0);
        assert_eq!(quot.deltas.cs_diff.ten_to_twenty, 0.0);
    }

    #[test]
    fn zero_plays_yields_zero_rates() {
        let mut sum = MatchSum::default();
        sum.scalars.wins = 3;

        let quot = MatchQuotient::from_sum(&sum);
        assert_eq!(quot.scalars.plays, 0.0);
        assert_eq!(quot.scalars.wins, 0.0);
    }

    #[test]
    fn zero_duration_bucket_yields_zero_delta() {
        let mut sum = MatchSum::default();
        sum.scalars.plays = 2;
        sum.deltas.xp_diff.ten_to_twenty = 50.0;
        // duration distribution left empty on purpose

        let quot = MatchQuotient::from_sum(&sum);
        assert_eq!(quot.deltas.xp_diff.ten_to_twenty, 0.0);
    }

    #[test]
    fn subscalars_carry_raw_play_count() {
        let mut sum = MatchSum::default();
        sum.scalars.plays = 10;
        sum.summoners.insert("4|12".to_string(), Subscalars { plays : 4, wins : 3 });

        let quot = MatchQuotient::from_sum(&sum);
        let ss = &quot.summoners["4|12"];
        assert_eq!(ss.plays, 0.4);
        assert_eq!(ss.wins, 0.75);
        assert_eq!(ss.play_count, 4);
    }
}
