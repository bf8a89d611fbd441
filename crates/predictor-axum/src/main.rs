//! Server entry point.

use anyhow::Context;
use predictor_axum::{ServerConfig, init_tracing, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.environment).context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting predictor"
    );

    start_server(config).await
}
