use futures::future::join_all;
use site_scraper::config::{load_config, AppConfig, TargetConfig};
use site_scraper::model::ScrapeTarget;
use site_scraper::scraper::{HttpFetcher, Scraper};
use std::env;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: Arc<AppConfig> = match load_config(&config_path) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    info!("Targets to scrape: {}", config.targets.len());

    // Each scrape blocks, so every target gets its own blocking thread.
    let tasks: Vec<_> = config.targets.iter().cloned().map(|target| {
        let config = config.clone();
        tokio::task::spawn_blocking(move || scrape_target(&config, target))
    }).collect();

    let mut succeeded = 0;
    let mut failed = 0;
    for result in join_all(tasks).await {
        match result {
            Ok(true) => succeeded += 1,
            Ok(false) => failed += 1,
            Err(e) => {
                warn!("Scrape task panicked: {}", e);
                failed += 1;
            }
        }
    }

    info!("Finished: {} succeeded, {} failed", succeeded, failed);
}

/// Scrapes a single configured target. Returns whether it produced a result.
fn scrape_target(config: &AppConfig, target: TargetConfig) -> bool {
    info!("Scraping {} ({})", target.website_name, target.url);

    let fetcher = match HttpFetcher::new(&config.fetcher) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return false;
        }
    };

    let spec = ScrapeTarget::new(target.url, target.website_name);
    let scraper = match Scraper::new(spec, &config.outputs_root, fetcher) {
        Ok(s) => s.with_processors(target.processors),
        Err(e) => {
            error!("Failed to prepare scraper: {}", e);
            return false;
        }
    };

    match scraper.scrape() {
        Some(_) => {
            info!("Saved {} output to {}", scraper.target().website_name, scraper.output_folder().display());
            true
        }
        None => false,
    }
}
