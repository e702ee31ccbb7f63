
//! Read-only match statistics for League of Legends. Pre-aggregated match
//! sums live in a wide-column store keyed by (champion, enemy, patch,
//! tier, region, role); this crate fans the per-filter fetches out, sums
//! them, divides them into per-play quotients and derives ranked
//! aggregates for a champion against its role cohort.

// extern crate definitions
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate strum_macros;

// internal mods
pub mod aggregation;
pub mod config;
pub mod models;
pub mod server;
pub mod store;
pub mod vulgate;
