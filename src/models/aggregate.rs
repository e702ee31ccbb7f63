
// external uses
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// my mods
use crate::models::filters::{Ability, Role};

/// The final report for one champion over its cohort: where it ranks, how
/// the numbers distribute, and what gets built on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchAggregate {
    pub role : MatchAggregateRoles,
    pub statistics : MatchAggregateStatistics,
    pub graphs : MatchAggregateGraphs,
    pub collections : MatchAggregateCollections,
}

/// One ranked metric. `change` is reserved for historical comparison and
/// always reads zero for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Statistic {
    pub rank : u32,
    pub change : i32,
    pub value : f64,
    pub average : f64,
    pub percentile : f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchAggregateRoles {
    pub role : Option<Role>,
    pub total_champions_in_role : u32,
    pub role_stats : Vec<RoleStats>,
}

/// How often the champion shows up in each role, across all its roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct RoleStats {
    pub role : Role,
    pub pick_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchAggregateStatistics {
    pub scalars : ScalarStatistics,
    pub deltas : DeltaStatistics,
}

/// One `Statistic` per scalar metric, ranked across the cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct ScalarStatistics {
    pub win_rate : Statistic,
    pub pick_rate : Statistic,
    pub ban_rate : Statistic,
    pub games_played : Statistic,
    pub gold_earned : Statistic,
    pub kills : Statistic,
    pub deaths : Statistic,
    pub assists : Statistic,
    pub damage_dealt : Statistic,
    pub damage_taken : Statistic,
    pub minions_killed : Statistic,
    pub team_jungle_minions_killed : Statistic,
    pub enemy_jungle_minions_killed : Statistic,
    pub structure_damage : Statistic,
    pub killing_spree : Statistic,
    pub wards_bought : Statistic,
    pub wards_placed : Statistic,
    pub wards_killed : Statistic,
    pub crowd_control : Statistic,
    pub first_blood : Statistic,
    pub first_blood_assist : Statistic,
    pub double_kills : Statistic,
    pub triple_kills : Statistic,
    pub quadrakills : Statistic,
    pub pentakills : Statistic,
    pub physical_damage : Statistic,
    pub magic_damage : Statistic,
    pub true_damage : Statistic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct DeltaStatistics {
    pub cs_diff : DeltaStatistic,
    pub xp_diff : DeltaStatistic,
    pub damage_taken_diff : DeltaStatistic,
    pub xp_per_min : DeltaStatistic,
    pub gold_per_min : DeltaStatistic,
    pub towers_per_min : DeltaStatistic,
    pub wards_placed : DeltaStatistic,
    pub damage_taken : DeltaStatistic,
}

/// Ranked statistics for one timeline metric, one per game-time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct DeltaStatistic {
    pub zero_to_ten : Statistic,
    pub ten_to_twenty : Statistic,
    pub twenty_to_thirty : Statistic,
    pub thirty_to_end : Statistic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchAggregateGraphs {
    pub distribution : Distribution,
    pub by_patch : Vec<ByPatch>,
    pub by_game_length : Vec<ByGameLength>,
    pub by_experience : Vec<ByExperience>,
    pub physical_damage : f64,
    pub magic_damage : f64,
    pub true_damage : f64,
}

/// Champion-id keyed rate maps over the whole cohort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Distribution {
    pub win_rate : HashMap<u32, f64>,
    pub pick_rate : HashMap<u32, f64>,
    pub ban_rate : HashMap<u32, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct ByPatch {
    pub patch : String,
    pub win_rate : f64,
    pub pick_rate : f64,
    pub ban_rate : f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct IntRange {
    pub min : u32,
    pub max : u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct ByGameLength {
    pub game_length : IntRange,
    pub win_rate : f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct ByExperience {
    pub experience : IntRange,
    pub win_rate : f64,
}

/// Parsed key collections, filtered by minimum pick rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MatchAggregateCollections {
    pub runes : Vec<RuneSet>,
    pub masteries : Vec<MasterySet>,
    pub keystones : Vec<Keystone>,
    pub summoner_spells : Vec<SummonerSet>,
    pub trinkets : Vec<Trinket>,
    pub skill_orders : Vec<SkillOrder>,
    pub starter_items : Vec<Build>,
    pub build_path : Vec<Build>,
    pub core_build_list : Vec<Build>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct RuneSet {
    pub runes : HashMap<u32, u32>,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct MasterySet {
    pub masteries : HashMap<u32, u32>,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Keystone {
    pub keystone : u32,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct SummonerSet {
    pub spell1 : u32,
    pub spell2 : u32,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Trinket {
    pub trinket : u32,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct SkillOrder {
    pub skill_order : Vec<Ability>,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct Build {
    pub build : Vec<u32>,
    pub pick_rate : f64,
    pub win_rate : f64,
    pub num_matches : u32,
}
