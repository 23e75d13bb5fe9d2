//! relayd - a small IRC-style chat relay.
//!
//! Clients register a nickname, join rooms and exchange messages. State lives
//! in memory only and is gone on restart.

mod config;
mod error;
mod handlers;
mod intake;
mod network;
mod state;
mod telemetry;

use crate::config::Config;
use crate::handlers::Registry;
use crate::network::{Gateway, spawn_keepalive};
use crate::state::Matrix;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let explicit_path = std::env::args().nth(1);
    let config = match explicit_path.as_deref() {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)?,
        None => {
            info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
            Config::default()
        }
    };

    info!(
        server = %config.server.name,
        version = %config.server.version,
        "Starting relayd"
    );

    let matrix = Arc::new(Matrix::new(&config));
    let registry = Arc::new(Registry::new());

    let (intake, _workers) = intake::spawn(Arc::clone(&matrix), registry, &config.workers);
    let _keepalive = spawn_keepalive(Arc::clone(&matrix), config.server.idle_timeouts.ping);

    let gateway = Gateway::bind(
        config.listen.address,
        Arc::clone(&matrix),
        intake,
        config.limits.clone(),
    )
    .await?;

    gateway.run().await
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    Config::load(path).map_err(|e| {
        error!(path = %path, error = %e, "Failed to load config");
        e.into()
    })
}
