
//! The aggregation pipeline: expand a request into filter lists, fan the
//! sum fetches out concurrently, fold the arrivals, divide into quotients
//! and hand the cohort to the deriver.

mod deriver;
mod errors;
mod keys;

pub use deriver::*;
pub use errors::*;
pub use keys::*;

// external uses
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::{mpsc, Semaphore};

// my mods
use crate::models::{
    GetChampionRequest, MatchAggregate, MatchFilters, MatchQuotient, MatchSum, Region, Role,
    ANY_ENEMY,
};
use crate::store::MatchSumStore;
use crate::vulgate::Vulgate;

/// Upper bound on in-flight store fetches per fan-out, so a wide
/// patch/tier range cannot overrun the backing store.
const MAX_CONCURRENT_FETCHES : usize = 32;

/// How many patches the by-patch graph looks back over. Requests narrower
/// than this get their patch window widened leftward.
const PATCH_GRAPH_LOOKBACK : usize = 5;

/// Fetches match sums and derives aggregates. Collaborators are injected
/// at construction and shared read-only across requests; everything else
/// is request-scoped.
pub struct Aggregator {
    vulgate : Arc<Vulgate>,
    store : Arc<dyn MatchSumStore>,
    min_play_rate : f64,
}

impl Aggregator {

    pub fn new(
        vulgate : Arc<Vulgate>,
        store : Arc<dyn MatchSumStore>,
        min_play_rate : f64,
    ) -> Aggregator {
        Aggregator { vulgate, store, min_play_rate }
    }

    /// Computes the match aggregate for a champion request.
    pub async fn aggregate(&self, req : &GetChampionRequest) -> Result<MatchAggregate> {
        self.aggregate_versus(req, ANY_ENEMY).await
    }

    /// Computes the match aggregate against a specific opponent. Matchup
    /// requests pin `enemy_id`; plain champion requests pass `ANY_ENEMY`.
    pub async fn aggregate_versus(
        &self, req : &GetChampionRequest, enemy_id : i32) -> Result<MatchAggregate> {

        let champions = self.find_champion_quotients(req, enemy_id).await?;
        let roles = self.find_role_quotients(req, enemy_id).await?;
        let patches = self.find_patch_quotients(req, enemy_id).await?;

        debug!(
            "deriving champion {} from a cohort of {} over {} patches",
            req.champion_id, champions.len(), patches.len(),
        );

        derive(req.role, &champions, &roles, &patches, req.champion_id, self.min_play_rate)
    }

    /// One quotient per champion in the catalog, all sharing the request
    /// filters. Champions with no data are left out of the cohort.
    async fn find_champion_quotients(
        &self, req : &GetChampionRequest, enemy_id : i32,
    ) -> Result<HashMap<u32, MatchQuotient>> {

        let patches = self.vulgate.find_patches(&req.patch);
        let tiers = self.vulgate.find_tiers(&req.tier);

        let mut champions = HashMap::new();
        for id in self.vulgate.champion_ids() {
            let filters =
                build_filters(id as i32, enemy_id, &patches, &tiers, req.region, req.role);
            if let Some(quot) = self.quotient(filters).await? {
                champions.insert(id, quot);
            }
        }
        Ok(champions)
    }

    /// One quotient per role for the target champion.
    async fn find_role_quotients(
        &self, req : &GetChampionRequest, enemy_id : i32,
    ) -> Result<HashMap<Role, MatchQuotient>> {

        let patches = self.vulgate.find_patches(&req.patch);
        let tiers = self.vulgate.find_tiers(&req.tier);

        let mut roles = HashMap::new();
        for role in Role::iter() {
            let filters = build_filters(
                req.champion_id as i32, enemy_id, &patches, &tiers, req.region, role);
            if let Some(quot) = self.quotient(filters).await? {
                roles.insert(role, quot);
            }
        }
        Ok(roles)
    }

    /// Per-patch cohort snapshots over the widened patch window, for the
    /// by-patch graph.
    async fn find_patch_quotients(
        &self, req : &GetChampionRequest, enemy_id : i32,
    ) -> Result<HashMap<String, HashMap<u32, MatchQuotient>>> {

        let tiers = self.vulgate.find_tiers(&req.tier);

        let mut patches = HashMap::new();
        for patch in self.vulgate.find_n_previous_patches(&req.patch, PATCH_GRAPH_LOOKBACK) {
            let window = vec![patch.clone()];

            let mut of_patch = HashMap::new();
            for id in self.vulgate.champion_ids() {
                let filters =
                    build_filters(id as i32, enemy_id, &window, &tiers, req.region, req.role);
                if let Some(quot) = self.quotient(filters).await? {
                    of_patch.insert(id, quot);
                }
            }
            patches.insert(patch, of_patch);
        }
        Ok(patches)
    }

    async fn quotient(&self, filters : Vec<MatchFilters>) -> Result<Option<MatchQuotient>> {
        Ok(self.sum(filters).await?.map(|sum| MatchQuotient::from_sum(&sum)))
    }

    /// Fetches every filter concurrently and folds the arrivals into one
    /// sum. `None` means every filter came back absent, which downstream
    /// treats as "skip this key" rather than a zero data point.
    ///
    /// Workers stream results over a channel; the fold runs on the caller's
    /// task. A worker that errors still sends, and a worker that panics
    /// drops its sender, so the channel always closes once every worker is
    /// done. The first captured error fails the call after the channel
    /// drains.
    pub async fn sum(&self, filters : Vec<MatchFilters>) -> Result<Option<MatchSum>> {
        if filters.is_empty() {
            return Ok(None);
        }

        let (tx, mut rx) = mpsc::channel(filters.len());
        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));

        for filter in filters {
            let store = self.store.clone();
            let tx = tx.clone();
            let semaphore = semaphore.clone();

            tokio::spawn(async move {
                // never closed, so this only fails if the runtime is
                // tearing down
                let _permit = semaphore.acquire_owned().await;
                let result = store.get(&filter).await;
                let _ = tx.send(result).await;
            });
        }
        drop(tx);

        // arrival order is irrelevant: addition commutes
        let mut total : Option<MatchSum> = None;
        let mut failure = None;
        while let Some(result) = rx.recv().await {
            match result {
                Ok(Some(sum)) => {
                    total = Some(match total {
                        Some(acc) => acc + sum,
                        None => sum,
                    });
                }
                Ok(None) => {}
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                }
            }
        }

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(total),
        }
    }
}

/// Expands a champion/enemy pair into one filter per (patch, tier) cell.
fn build_filters(
    champion_id : i32,
    enemy_id : i32,
    patches : &[String],
    tiers : &[u32],
    region : Region,
    role : Role,
) -> Vec<MatchFilters> {

    let mut ret = Vec::with_capacity(patches.len() * tiers.len());
    for patch in patches {
        for tier in tiers {
            ret.push(MatchFilters {
                champion_id,
                enemy_id,
                patch : patch.clone(),
                tier : *tier,
                region,
                role,
            });
        }
    }
    ret
}
