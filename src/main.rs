
// extern crate definitions
#[macro_use]
extern crate error_chain;

use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use lol_match_stats::aggregation::Aggregator;
use lol_match_stats::config;
use lol_match_stats::models::{GetChampionRequest, PatchRange, Region, Role, TierRange};
use lol_match_stats::server::Server;
use lol_match_stats::store::HttpMatchSumStore;
use lol_match_stats::vulgate::Vulgate;

error_chain!{

    links {
        Config(lol_match_stats::config::Error, lol_match_stats::config::ErrorKind);
        Store(lol_match_stats::store::Error, lol_match_stats::store::ErrorKind);
        Server(lol_match_stats::server::Error, lol_match_stats::server::ErrorKind);
        Vulgate(lol_match_stats::vulgate::Error, lol_match_stats::vulgate::ErrorKind);
    }

    foreign_links {
        Json(::serde_json::Error);
        ParseInt(::std::num::ParseIntError);
        ParseEnum(::strum::ParseError);
    }
}

fn usage() {
    println!("Usage: lol-match-stats <champion_id> <patch_min> <patch_max> [region] [role]")
}

async fn do_main() -> Result<()> {

    let args : Vec<String> = env::args().collect();
    let (champion_id, patch_min, patch_max) = match (args.get(1), args.get(2), args.get(3)) {
        (Some(id), Some(min), Some(max)) => (id.parse::<u32>()?, min.clone(), max.clone()),
        _ => {
            usage();
            return Err(Error::from("missing command line arguments.".to_string()));
        }
    };
    let region = match args.get(4) {
        Some(r) => Region::from_str(r)?,
        None => Region::NA,
    };
    let role = match args.get(5) {
        Some(r) => Role::from_str(r)?,
        None => Role::MID,
    };

    let cfg = config::initialize()?;

    let vulgate = Arc::new(Vulgate::from_file(&cfg.vulgate_path)
        .chain_err(|| "unable to load the vulgate corpus")?);
    info!("vulgate loaded from {}", cfg.vulgate_path);

    let store = HttpMatchSumStore::new(
        &cfg.store_url,
        &cfg.store_keyspace,
        Duration::from_millis(cfg.fetch_timeout_ms),
    ).chain_err(|| "unable to construct the sum store")?;

    let aggregator = Aggregator::new(vulgate.clone(), Arc::new(store), cfg.min_play_rate);
    let server = Server::new(
        aggregator,
        vulgate,
        Duration::from_millis(cfg.request_timeout_ms),
    );

    let req = GetChampionRequest {
        champion_id,
        patch : PatchRange { min : patch_min, max : patch_max },
        tier : TierRange { min : 0x10, max : 0x70 },
        region,
        role,
    };

    info!("aggregating champion {} ({:?}, {:?})", champion_id, region, role);
    let champion = server.get_champion(&req).await
        .chain_err(|| "could not resolve the champion query")?;

    println!("{}", serde_json::to_string_pretty(&champion)?);
    Ok(())
}

/// Workaround to integrate error-chain with an async main function in
/// tokio. Pretty much just an expansion of the `quick_main!` macro
/// provided by error-chain.
#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(ref e) = do_main().await {
        use error_chain::ChainedError;
        use std::io::Write; // trait which holds `display_chain`
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
        ::std::process::exit(1);
    }
}
