
//! Environment-sourced application configuration. Every key can be set as
//! `LOL_STATS_<KEY>`; unset keys fall back to the defaults below. A local
//! `.env` file is honored for development.

// external uses
use serde::Deserialize;

error_chain!{

    foreign_links {
        Config(::config::ConfigError);
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port the query surface listens on.
    pub port : u16,
    /// Port health/monitoring is served from.
    pub monitor_port : u16,
    /// Base URL of the match sum row gateway.
    pub store_url : String,
    /// Keyspace holding the match sum table.
    pub store_keyspace : String,
    /// Path to the vulgate corpus file.
    pub vulgate_path : String,
    /// Per-fetch deadline, in milliseconds. The same deadline bounds every
    /// fetch of a fan-out.
    pub fetch_timeout_ms : u64,
    /// Deadline for a whole aggregate request, in milliseconds.
    pub request_timeout_ms : u64,
    /// Minimum per-play pick rate a collection entry needs to be reported.
    pub min_play_rate : f64,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            port : 4834,
            monitor_port : 4835,
            store_url : "http://localhost:4895".to_string(),
            store_keyspace : "athena".to_string(),
            vulgate_path : "./vulgate.json".to_string(),
            fetch_timeout_ms : 5000,
            request_timeout_ms : 30000,
            min_play_rate : 0.01,
        }
    }
}

/// Loads the configuration from the process environment.
pub fn initialize() -> Result<AppConfig> {
    dotenv::dotenv().ok();

    let cfg = config::Config::builder()
        .add_source(config::Environment::with_prefix("LOL_STATS"))
        .build()?;

    Ok(cfg.try_deserialize()?)
}
