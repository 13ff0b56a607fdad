//! Server binary for the sortviz sorting-algorithm visualizer.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `sortviz-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build shared state and locate the front-end build
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use sortviz_core::SortvizConfig;
use sortviz_server::{AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Path of the optional configuration file, relative to the working
/// directory.
const CONFIG_PATH: &str = "sortviz-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config is read first so its log level can seed the filter.
    let (config, from_file) = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("sortviz starting");
    if !from_file {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        max_array_len = config.server.max_array_len,
        max_trace_cells = config.server.max_trace_cells,
        strict_algorithm = config.sort.strict_algorithm,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config));
    let server_config = ServerConfig::from(&config.server);

    sortviz_server::start_server(&server_config, state)
        .await
        .map_err(AppError::from)?;

    info!("sortviz stopped");
    Ok(())
}

/// Load configuration from [`CONFIG_PATH`].
///
/// Returns the config and whether it came from the file.
fn load_config() -> Result<(SortvizConfig, bool), AppError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((SortvizConfig::from_file(config_path)?, true))
    } else {
        Ok((SortvizConfig::from_env()?, false))
    }
}
