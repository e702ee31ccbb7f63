
//! Thin request handlers over the aggregation pipeline. Each handler runs
//! the pipeline under the request deadline and wraps the result in an
//! envelope with champion metadata and patch times from the vulgate.
//! Nothing here computes; it only delegates and translates errors.

mod errors;
pub use errors::*;

// external uses
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

// my mods
use crate::aggregation::{self, Aggregator};
use crate::models::{GetChampionRequest, GetMatchupRequest, MatchAggregate, PatchRange};
use crate::vulgate::{ChampionInfo, Vulgate};

/// The champion response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct Champion {
    pub metadata : ChampionMetadata,
    pub aggregate : MatchAggregate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct ChampionMetadata {
    pub static_info : Option<ChampionInfo>,
    pub patch_start : DateTime<Utc>,
    pub patch_end : DateTime<Utc>,
}

/// A head-to-head response: both sides of the lane, each aggregated with
/// the other pinned as the opponent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct Matchup {
    pub focus : Champion,
    pub enemy : Champion,
}

pub struct Server {
    aggregator : Aggregator,
    vulgate : Arc<Vulgate>,
    request_timeout : Duration,
}

impl Server {

    pub fn new(aggregator : Aggregator, vulgate : Arc<Vulgate>, request_timeout : Duration) -> Server {
        Server { aggregator, vulgate, request_timeout }
    }

    pub async fn get_champion(&self, req : &GetChampionRequest) -> Result<Champion> {
        let aggregate = timeout(self.request_timeout, self.aggregator.aggregate(req))
            .await?
            .map_err(|e| translate(req.champion_id, e))?;

        Ok(self.envelope(req.champion_id, &req.patch, aggregate))
    }

    pub async fn get_matchup(&self, req : &GetMatchupRequest) -> Result<Matchup> {
        let focus_req = GetChampionRequest {
            champion_id : req.focus_champion_id,
            patch : req.patch.clone(),
            tier : req.tier,
            region : req.region,
            role : req.role,
        };
        let enemy_req = GetChampionRequest {
            champion_id : req.enemy_champion_id,
            ..focus_req.clone()
        };

        let focus = timeout(
                self.request_timeout,
                self.aggregator.aggregate_versus(&focus_req, req.enemy_champion_id as i32))
            .await?
            .map_err(|e| translate(req.focus_champion_id, e))?;
        let enemy = timeout(
                self.request_timeout,
                self.aggregator.aggregate_versus(&enemy_req, req.focus_champion_id as i32))
            .await?
            .map_err(|e| translate(req.enemy_champion_id, e))?;

        Ok(Matchup {
            focus : self.envelope(req.focus_champion_id, &req.patch, focus),
            enemy : self.envelope(req.enemy_champion_id, &req.patch, enemy),
        })
    }

    fn envelope(
        &self, champion_id : u32, patch : &PatchRange, aggregate : MatchAggregate) -> Champion {

        let times = self.vulgate.patch_times(patch);
        Champion {
            metadata : ChampionMetadata {
                static_info : self.vulgate.champion_info(champion_id).cloned(),
                patch_start : times.start,
                patch_end : times.end,
            },
            aggregate,
        }
    }
}

/// Maps pipeline failures onto the wire kinds: a cohort without the target
/// is a not-found, everything else is internal.
fn translate(champion_id : u32, e : aggregation::Error) -> Error {
    if let aggregation::ErrorKind::ChampionNotFound(_) = e.kind() {
        return ErrorKind::NotFound(format!("champion {}", champion_id)).into();
    }
    Error::with_chain(e, "could not get champion")
}
