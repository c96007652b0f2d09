//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::{StorageBackend, StorageConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Record store selection.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config/default.toml`, the `config/{env}.toml`
    /// overlay, and `REALTY__*` environment variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Same as [`AppConfig::load`] with an explicit configuration directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("REALTY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that cannot start.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.storage.backend == StorageBackend::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required when storage.backend = \"postgres\"",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::configuration(
                "database.min_connections must not exceed database.max_connections",
            ));
        }
        Ok(())
    }
}
