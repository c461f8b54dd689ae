// src/main.rs
mod config;
mod directory;
mod display;
mod error;
mod fallback;
mod models;
mod refresh;
mod utils;

use crate::config::Config;
use crate::directory::{HttpFetcher, Resolver};
use crate::display::ConsoleSink;
use env_logger::Env;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger only once at the start
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // .env values only fill in variables that aren't already set
    dotenv::dotenv().ok();
    let config = Config::from_env();

    info!(
        "Using {} directory endpoints and {} relays, {}ms per attempt",
        config.endpoints.len(),
        config.relays.len(),
        config.fetch_timeout_ms
    );
    if config.endpoints.is_empty() {
        warn!("No directory endpoints configured, only demo servers will be shown");
    }

    let resolver = Resolver::from_config(HttpFetcher::new()?, &config);
    let sink = ConsoleSink::stdout();

    if config.run_once {
        refresh::load_servers(&resolver, &sink).await;
        return Ok(());
    }

    info!("Refreshing every {:?}", config.refresh_interval());
    refresh::run(&resolver, &sink, config.refresh_interval(), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await;

    Ok(())
}
