
//! The vulgate is the authoritative static corpus: patches in release
//! order, the champion catalog, and patch time windows. It is loaded once
//! at startup and shared immutably for the life of the process.

mod errors;
pub use errors::*;

// external uses
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use strum::IntoEnumIterator;

// my mods
use crate::models::{PatchRange, Tier, TierRange};

/// Static attributes of one champion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct ChampionInfo {
    pub id : u32,
    pub name : String,   // display name, e.g. "Lee Sin"
    pub key : String,    // asset key, e.g. "LeeSin"
    pub title : String,  // flavor title, e.g. "the Blind Monk"
}

/// The wall-clock window a patch (or patch range) was live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct PatchTime {
    pub start : DateTime<Utc>,
    pub end : DateTime<Utc>,
}

/// On-disk shape of the corpus file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all="camelCase")]
pub struct VulgateData {
    pub patches : Vec<String>,
    pub champions : Vec<ChampionInfo>,
    pub patch_times : HashMap<String, PatchTime>,
}

#[derive(Debug)]
pub struct Vulgate {
    patches : Vec<String>,
    champions : HashMap<u32, ChampionInfo>,
    patch_times : HashMap<String, PatchTime>,
}

impl Vulgate {

    /// Reads and parses the corpus file. This is the only operation that
    /// can fail; every query below is total.
    pub fn from_file(path : &str) -> Result<Vulgate> {
        let raw = fs::read_to_string(path)
            .chain_err(|| format!("could not read vulgate file {}", path))?;
        let data : VulgateData = serde_json::from_str(&raw)
            .chain_err(|| format!("could not parse vulgate file {}", path))?;
        Ok(Self::from_data(data))
    }

    pub fn from_data(data : VulgateData) -> Vulgate {
        Vulgate {
            patches : data.patches,
            champions : data.champions.into_iter().map(|c| (c.id, c)).collect(),
            patch_times : data.patch_times,
        }
    }

    /// All patches from `range.min` to `range.max` inclusive, in release
    /// order. Empty if either endpoint is not a known patch.
    pub fn find_patches(&self, range : &PatchRange) -> Vec<String> {
        let start = self.patches.iter().position(|p| *p == range.min);
        let end = self.patches.iter().position(|p| *p == range.max);

        match (start, end) {
            (Some(s), Some(e)) if s <= e => self.patches[s..=e].to_vec(),
            _ => Vec::new(),
        }
    }

    /// Like `find_patches`, but widened leftward until the result holds
    /// `n` patches (or the list runs out). Used for by-patch graphs so a
    /// one-patch query still charts a trend.
    pub fn find_n_previous_patches(&self, range : &PatchRange, n : usize) -> Vec<String> {
        let start = self.patches.iter().position(|p| *p == range.min);
        let end = self.patches.iter().position(|p| *p == range.max);

        match (start, end) {
            (Some(s), Some(e)) if s <= e => {
                let widened = if e + 1 >= n { std::cmp::min(s, e + 1 - n) } else { 0 };
                self.patches[widened..=e].to_vec()
            }
            _ => Vec::new(),
        }
    }

    /// Tier codes within the range, ascending.
    pub fn find_tiers(&self, range : &TierRange) -> Vec<u32> {
        Tier::iter()
            .map(|t| t as u32)
            .filter(|t| range.min <= *t && *t <= range.max)
            .collect()
    }

    pub fn champion_ids(&self) -> Vec<u32> {
        self.champions.keys().cloned().collect()
    }

    pub fn champion_info(&self, id : u32) -> Option<&ChampionInfo> {
        self.champions.get(&id)
    }

    /// The wall-clock window covered by the range: start of `range.min`
    /// through end of `range.max`. Unknown patches read as the epoch so
    /// the query stays total.
    pub fn patch_times(&self, range : &PatchRange) -> PatchTime {
        let epoch = DateTime::<Utc>::from(std::time::UNIX_EPOCH);
        PatchTime {
            start : self.patch_times.get(&range.min).map(|t| t.start).unwrap_or(epoch),
            end : self.patch_times.get(&range.max).map(|t| t.end).unwrap_or(epoch),
        }
    }
}
