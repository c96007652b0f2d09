//! Realty Server
//!
//! Main entry point: loads configuration, installs the tracing subscriber
//! and runs the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use realty_core::config::AppConfig;
use realty_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = realty_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `REALTY_CONFIG_DIR` (default `config`) with the
/// `REALTY_ENV` overlay (default `development`).
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var("REALTY_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("REALTY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
