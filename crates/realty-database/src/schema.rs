//! Realty schema: embedded migrations and the table check run at startup.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{info, warn};

use realty_core::error::{AppError, ErrorKind};
use realty_core::result::AppResult;

use crate::repositories::client::CLIENTS;
use crate::repositories::document::DOCUMENTS;
use crate::repositories::property::PROPERTIES;
use crate::repositories::user::USERS;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Every table a repository reads from.
pub const REALTY_TABLES: [&str; 4] = [
    PROPERTIES.table,
    CLIENTS.table,
    DOCUMENTS.table,
    USERS.table,
];

/// Bring the schema up to date (when `apply_migrations` is set) and verify
/// that every resource table exists. A missing table is a configuration error.
pub async fn prepare_schema(pool: &PgPool, apply_migrations: bool) -> AppResult<()> {
    if apply_migrations {
        info!(available = MIGRATOR.iter().count(), "Applying realty migrations");
        MIGRATOR.run(pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to run migrations: {e}"), e)
        })?;
    }

    let missing = missing_tables(pool).await?;
    if !missing.is_empty() {
        warn!(missing = ?missing, "Realty schema is incomplete");
        return Err(AppError::configuration(format!(
            "Database is missing tables: {}; enable database.run_migrations or apply migrations/",
            missing.join(", ")
        )));
    }

    info!(tables = REALTY_TABLES.len(), "Realty schema ready");
    Ok(())
}

/// Resource tables absent from the current schema.
pub async fn missing_tables(pool: &PgPool) -> AppResult<Vec<&'static str>> {
    let found: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name::text = ANY($1)",
    )
    .bind(REALTY_TABLES.map(String::from).to_vec())
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to inspect schema", e))?;

    Ok(absent(&found))
}

fn absent(found: &[String]) -> Vec<&'static str> {
    REALTY_TABLES
        .into_iter()
        .filter(|table| !found.iter().any(|f| f == table))
        .collect()
}
