//! Launch Records Dashboard Server
//!
//! Run with: cargo run --bin launchdash
//!
//! # Configuration
//!
//! Read from `launchdash.toml` (see `launchdash-cli config`), then
//! overridden by environment variables:
//! - `LAUNCHDASH_DATA_PATH`: Dataset CSV (default: spacex_launch_dash.csv)
//! - `LAUNCHDASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHDASH_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHDASH_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHDASH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter, takes precedence over the log level

use anyhow::Context;
use launchdash::api::{serve, AppState};
use launchdash::config::{Config, LoggingConfig};
use launchdash::dataset::Dataset;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Launch Records Dashboard v{}", env!("CARGO_PKG_VERSION"));

    // A dataset that fails to load or validate is fatal
    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("Failed to load dataset {:?}", config.dataset.path))?;
    tracing::info!("Dataset: {}", dataset.stats());

    let state = AppState::new(Arc::new(dataset), config.server.clone());
    tracing::info!(
        bindings = state.registry.len(),
        max_connections = config.server.max_connections,
        "Bindings registered"
    );

    serve(state).await.context("Server error")?;

    tracing::info!("Launch Records Dashboard stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchdash={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
