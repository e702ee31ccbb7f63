
// external uses
use derive_more::Add;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Sum;
use std::ops;

/// The atomic counter bundle, pre-aggregated offline for each filter key.
///
/// Every substructure and map may be absent on the wire; decoding fills the
/// missing pieces with zero values, so in-memory sums are always dense and
/// downstream arithmetic never has to null-check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchSum {
    pub scalars : Scalars,
    pub deltas : Deltas,
    pub duration_distribution : DurationDistribution,

    // string-keyed subscalar maps; keys are serialized compound values
    // (see aggregation::keys for the grammars)
    pub masteries : HashMap<String, Subscalars>,
    pub runes : HashMap<String, Subscalars>,
    pub keystones : HashMap<String, Subscalars>,
    pub summoners : HashMap<String, Subscalars>,
    pub skill_orders : HashMap<String, Subscalars>,
    pub starter_items : HashMap<String, Subscalars>,
    pub build_path : HashMap<String, Subscalars>,
    pub core_build_list : HashMap<String, Subscalars>,

    // integer-keyed subscalar maps
    pub trinkets : HashMap<u32, Subscalars>,
    pub durations : HashMap<u32, Subscalars>,
    pub bans : HashMap<u32, Subscalars>,
    pub allies : HashMap<u32, Subscalars>,
    pub enemies : HashMap<u32, Subscalars>,
}

/// Per-game counters. `plays` is the denominator for every other field
/// when a sum is divided into a quotient.
#[derive(Add, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Scalars {
    pub plays : u64,
    pub wins : u64,
    pub gold_earned : u64,
    pub kills : u64,
    pub deaths : u64,
    pub assists : u64,
    pub damage_dealt : u64,
    pub damage_taken : u64,
    pub minions_killed : u64,
    pub team_jungle_minions_killed : u64,
    pub enemy_jungle_minions_killed : u64,
    pub structure_damage : u64,
    pub killing_spree : u64,
    pub wards_bought : u64,
    pub wards_placed : u64,
    pub wards_killed : u64,
    pub crowd_control : u64,
    pub first_blood : u64,
    pub first_blood_assist : u64,
    pub doublekills : u64,
    pub triplekills : u64,
    pub quadrakills : u64,
    pub pentakills : u64,
    pub physical_damage : u64,
    pub magic_damage : u64,
    pub true_damage : u64,
}

/// The eight timeline metrics, each bucketed by game time.
#[derive(Add, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Deltas {
    pub cs_diff : Delta,
    pub xp_diff : Delta,
    pub damage_taken_diff : Delta,
    pub xp_per_min : Delta,
    pub gold_per_min : Delta,
    pub towers_per_min : Delta,
    pub wards_placed : Delta,
    pub damage_taken : Delta,
}

/// Cumulative values of one timeline metric across the four game-time
/// buckets. The divisor for each bucket is the matching
/// `DurationDistribution` bucket.
#[derive(Add, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Delta {
    pub zero_to_ten : f64,
    pub ten_to_twenty : f64,
    pub twenty_to_thirty : f64,
    pub thirty_to_end : f64,
}

/// How many games fell into each duration bucket.
#[derive(Add, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct DurationDistribution {
    pub zero_to_ten : u64,
    pub ten_to_twenty : u64,
    pub twenty_to_thirty : u64,
    pub thirty_to_end : u64,
}

/// A `{plays, wins}` pair scoped to one discrete key, e.g. a rune page
/// or an item build.
#[derive(Add, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Subscalars {
    pub plays : u64,
    pub wins : u64,
}

impl ops::Add for MatchSum {

    type Output = MatchSum;

    /// Point-wise sum of two match sums. Commutative and associative, with
    /// `MatchSum::default()` as the identity; the fan-out collector relies
    /// on this to fold arrivals in whatever order they land.
    fn add(self, other : MatchSum) -> MatchSum {
        MatchSum {
            scalars : self.scalars + other.scalars,
            deltas : self.deltas + other.deltas,
            duration_distribution : self.duration_distribution + other.duration_distribution,
            masteries : add_subscalar_maps(self.masteries, other.masteries),
            runes : add_subscalar_maps(self.runes, other.runes),
            keystones : add_subscalar_maps(self.keystones, other.keystones),
            summoners : add_subscalar_maps(self.summoners, other.summoners),
            skill_orders : add_subscalar_maps(self.skill_orders, other.skill_orders),
            starter_items : add_subscalar_maps(self.starter_items, other.starter_items),
            build_path : add_subscalar_maps(self.build_path, other.build_path),
            core_build_list : add_subscalar_maps(self.core_build_list, other.core_build_list),
            trinkets : add_subscalar_maps(self.trinkets, other.trinkets),
            durations : add_subscalar_maps(self.durations, other.durations),
            bans : add_subscalar_maps(self.bans, other.bans),
            allies : add_subscalar_maps(self.allies, other.allies),
            enemies : add_subscalar_maps(self.enemies, other.enemies),
        }
    }
}

impl Sum for MatchSum {
    fn sum<I : Iterator<Item = MatchSum>>(iter : I) -> MatchSum {
        let mut total = MatchSum::default();
        for item in iter {
            total = total + item;
        }
        total
    }
}

/// Key-union of two subscalar maps; colliding keys add their plays and
/// wins, singleton keys carry over unchanged. Consumes both operands and
/// returns a fresh map.
fn add_subscalar_maps<K>(
    a : HashMap<K, Subscalars>, b : HashMap<K, Subscalars>) -> HashMap<K, Subscalars>
    where K : Eq + Hash {

    let mut out = a;
    for (key, bv) in b {
        let entry = out.entry(key).or_default();
        *entry = *entry + bv;
    }
    out
}
