//! Health check and fallback handlers.

use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::warn;

use realty_core::error::ErrorCode;
use realty_core::types::ResponseMeta;
use realty_database::StorageHealth;

use crate::response::ControllerResponse;
use crate::state::AppState;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Active record store backend.
    pub storage: &'static str,
    /// Database check; absent for the memory backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<StorageHealth>,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> ControllerResponse {
    let database = match &state.database {
        Some(pool) => Some(pool.health().await),
        None => None,
    };
    let database_ok = database.as_ref().is_none_or(StorageHealth::is_ok);
    if !database_ok {
        warn!(database = ?database, "Health check degraded");
    }

    let (status, label) = if database_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status: label,
        version: env!("CARGO_PKG_VERSION"),
        storage: state.store.backend(),
        database,
    };
    ControllerResponse::success(status, body, ResponseMeta::default()).unwrap_or_else(|err| {
        ControllerResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "Health check failed", err.code, None)
    })
}

/// Any unmatched route.
pub async fn not_found() -> ControllerResponse {
    ControllerResponse::error(
        StatusCode::NOT_FOUND,
        "Route not found",
        ErrorCode::ResourceNotFound,
        None,
    )
}
