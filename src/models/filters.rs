
use serde::{Deserialize, Serialize};

/// Sentinel champion id meaning "any champion". Rows keyed with this id
/// aggregate over the whole champion pool.
pub const ANY_CHAMPION : i32 = -1;

/// Sentinel enemy id meaning "no specific opponent".
pub const ANY_ENEMY : i32 = -1;

/// Shards the match data is partitioned by. Can be readily converted into
/// an i32 with the as operator for the store row key.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, EnumIter, EnumString, Display)]
pub enum Region {
    NA = 1,
    EUW,
    EUNE,
    BR,
    OCE,
    KR,
    TR,
    RU,
    LAN,
    LAS,
    JP,
}

/// The five positions a champion is played in. Role fan-outs iterate these
/// in declaration order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, EnumIter, EnumString, Display)]
pub enum Role {
    TOP = 1,
    JUNGLE,
    MID,
    BOT,
    SUPPORT,
}

/// Champion abilities, as they appear in serialized skill order keys.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Display)]
pub enum Ability {
    Q = 1,
    W,
    E,
    R,
}

/// Skill brackets, coded so that better brackets compare greater.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, EnumIter, Display)]
pub enum Tier {
    Bronze = 0x10,
    Silver = 0x20,
    Gold = 0x30,
    Platinum = 0x40,
    Diamond = 0x50,
    Master = 0x60,
    Challenger = 0x70,
}

/// An inclusive range of patches, both endpoints named as they appear in
/// the vulgate patch list (e.g. "6.15" to "6.17").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct PatchRange {
    pub min : String,
    pub max : String,
}

/// An inclusive range of tier codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all="camelCase", default)]
pub struct TierRange {
    pub min : u32,
    pub max : u32,
}

/// The composite key addressing one row of pre-aggregated sums in the
/// backing store. One fetch is issued per filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct MatchFilters {
    pub champion_id : i32,
    pub enemy_id : i32,
    pub patch : String,
    pub tier : u32,
    pub region : Region,
    pub role : Role,
}

/// A single-champion statistics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct GetChampionRequest {
    pub champion_id : u32,
    pub patch : PatchRange,
    pub tier : TierRange,
    pub region : Region,
    pub role : Role,
}

/// A head-to-head query; the same range fields as `GetChampionRequest`
/// with a focus champion and a specific opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct GetMatchupRequest {
    pub focus_champion_id : u32,
    pub enemy_champion_id : u32,
    pub patch : PatchRange,
    pub tier : TierRange,
    pub region : Region,
    pub role : Role,
}
