//! Record store selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which [`RecordStore`](crate::traits::RecordStore) implementation backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL through the shared sqlx pool.
    #[default]
    Postgres,
    /// In-process tables; data is lost on shutdown.
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,
}
