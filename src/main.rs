use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripplanner::{TripPlannerConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing or invalid credentials must stop the process before any
    // request is served.
    let config = TripPlannerConfig::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!("Starting tripplanner v{}", tripplanner::VERSION);
    web::run(config).await
}
