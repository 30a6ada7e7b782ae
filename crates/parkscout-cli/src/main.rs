use std::path::PathBuf;

use clap::Parser;

use parkscout_core::CacheStore;
use parkscout_scraper::{NpsClient, PlacesClient};

mod input;
mod navigator;
mod render;

#[derive(Debug, Parser)]
#[command(name = "parkscout")]
#[command(about = "Explore US national park sites by state")]
struct Cli {
    /// Override the cache snapshot location.
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = parkscout_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let snapshot_path = cli.snapshot.unwrap_or_else(|| config.snapshot_path.clone());
    let (cache, status) = CacheStore::load(&snapshot_path);
    tracing::info!(?status, path = %snapshot_path.display(), "cache snapshot");

    let nps = NpsClient::new(
        &config.nps_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let places = PlacesClient::new(
        &config.places_url,
        &config.mapquest_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut navigator =
        navigator::Navigator::new(cache, nps, places, stdin.lock(), stdout.lock());
    navigator.run().await?;

    if let Err(e) = navigator.cache().save(&snapshot_path) {
        tracing::warn!(error = %e, path = %snapshot_path.display(), "failed to write cache snapshot");
    }
    Ok(())
}
