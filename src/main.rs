mod config;
mod fetcher;
mod filter;
mod logging;
mod matcher;
mod model;
mod normalizer;
mod parser;
mod reconcile;
mod report;
mod similarity;
mod sources;
mod utils;

use config::{load_config_or_default, AppConfig, ConfigOrigin};
use fetcher::ScraperImpl;
use filter::CompetitionFilter;
use matcher::NameMatcher;
use model::MatchRecord;
use parser::{
    AllFootballParser, DaddyLiveParser, OneFootballParser, ParseContext, SourceParser,
    WheresTheMatchParser,
};
use reconcile::Reconciler;
use sources::SourceRunner;
use std::time::Duration;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";
const DEBUG_DIR: &str = "logs/html";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let loaded = load_config_or_default(CONFIG_PATH);
    let log_path = match &loaded {
        Ok((cfg, _)) => cfg.log_path.clone(),
        Err(_) => AppConfig::default().log_path,
    };
    let _log_guard = logging::init_logging(&log_path);

    // Route panics through the log as well
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    info!("=== Starting match aggregator ===");

    let config = match loaded {
        Ok((cfg, ConfigOrigin::File)) => {
            info!("Loaded configuration from {}", CONFIG_PATH);
            cfg
        }
        Ok((cfg, ConfigOrigin::Defaults)) => {
            warn!("{} not found, using default settings", CONFIG_PATH);
            cfg
        }
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let filter = CompetitionFilter::from_file(&config.banned_list_path);
    info!("Excluding {} tournaments by name", filter.banned_count());
    let matcher = NameMatcher::with_similarity(config.name_similarity);

    let scraper = match ScraperImpl::new(
        &config.user_agent,
        Duration::from_secs(config.request_timeout_seconds),
    ) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let runner = SourceRunner::new(&scraper, ParseContext::now()).with_debug_dir(DEBUG_DIR);

    let (primary, auxiliary) = collect_sources(&runner, &config).await;

    info!("Starting match merge...");
    let merged = match Reconciler::new(&filter, &matcher).merge(primary, &auxiliary) {
        Ok(merged) => merged,
        Err(e) => {
            error!("Merge aborted: {}", e);
            return;
        }
    };

    match report::write_report(&config.output_path, &merged) {
        Ok(()) => info!("Saved {} matches to {}", merged.len(), config.output_path),
        Err(e) => error!("Error writing to {}: {}", config.output_path, e),
    }

    info!("=== Finished match aggregator ===");
}

/// Fetches every source in turn. The auxiliary list order is the channel merge order.
async fn collect_sources(
    runner: &SourceRunner<'_>,
    config: &AppConfig,
) -> (Vec<MatchRecord>, Vec<Vec<MatchRecord>>) {
    let primary = runner.fetch(&OneFootballParser::new(&config.onefootball_url)).await;

    let auxiliary_sources: Vec<Box<dyn SourceParser>> = vec![
        Box::new(WheresTheMatchParser::new(&config.wheresthematch_url)),
        Box::new(DaddyLiveParser::new(&config.daddylive_url, &config.daddylive_referer)),
        Box::new(AllFootballParser::new(&config.allfootball_url)),
    ];

    let mut auxiliary = Vec::with_capacity(auxiliary_sources.len());
    for source in &auxiliary_sources {
        auxiliary.push(runner.fetch(source.as_ref()).await);
    }

    (primary, auxiliary)
}
