//! Application builder and server bootstrap.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use realty_core::config::{AppConfig, StorageBackend};
use realty_core::error::AppError;
use realty_core::traits::RecordStore;
use realty_database::schema::prepare_schema;
use realty_database::{DatabasePool, MemoryStore, PgStore};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::middleware::request_id::request_id;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// The request id middleware is outermost so every other layer and the
/// controllers see the id.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
        .layer(axum_middleware::from_fn(request_id))
}

/// Open the configured record store.
///
/// The postgres backend also returns its pool, applies pending migrations
/// when `database.run_migrations` is set, and refuses to start when a
/// resource table is missing.
pub async fn open_store(
    config: &AppConfig,
) -> Result<(Arc<dyn RecordStore>, Option<DatabasePool>), AppError> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let database = DatabasePool::connect(&config.database).await?;
            prepare_schema(database.pool(), config.database.run_migrations).await?;
            let store = PgStore::new(database.pool().clone());
            Ok((Arc::new(store), Some(database)))
        }
        StorageBackend::Memory => {
            warn!("Using the in-memory record store; data is lost on shutdown");
            Ok((Arc::new(MemoryStore::new()), None))
        }
    }
}

/// Runs the Realty server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.storage.backend,
        "Starting Realty server"
    );

    let (store, database) = open_store(&config).await?;
    let addr = config.server.bind_address();
    let state = AppState::new(config, store, database.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "Realty server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(database) = database {
        database.close().await;
    }
    info!("Realty server shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
