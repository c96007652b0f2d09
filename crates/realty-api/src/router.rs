//! Route definitions for the Realty HTTP API.
//!
//! Every resource is mounted under `/api/{resource}` with the same five
//! routes. Resource routers carry their own [`CrudEndpoint`] as state; the
//! health route reads the shared [`AppState`].

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::endpoint::CrudEndpoint;
use crate::handlers::{health, resource};
use crate::state::AppState;

/// Build the API router without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .nest("/properties", resource_routes(Arc::clone(&state.properties)))
        .nest("/clients", resource_routes(Arc::clone(&state.clients)))
        .nest("/documents", resource_routes(Arc::clone(&state.documents)))
        .nest("/users", resource_routes(Arc::clone(&state.users)));

    Router::new()
        .nest("/api", api_routes)
        .fallback(health::not_found)
        .with_state(state)
}

/// `GET|POST /` and `GET|PUT|PATCH|DELETE /{id}` for one resource.
fn resource_routes(endpoint: Arc<dyn CrudEndpoint>) -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list).post(resource::create))
        .route(
            "/{id}",
            get(resource::get)
                .put(resource::update)
                .patch(resource::update)
                .delete(resource::delete),
        )
        .with_state(endpoint)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use realty_core::config::AppConfig;
    use realty_database::MemoryStore;

    use super::*;

    async fn call(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn router() -> Router {
        let state = AppState::new(AppConfig::default(), Arc::new(MemoryStore::new()), None);
        build_router(state)
    }

    #[tokio::test]
    async fn test_every_resource_is_mounted() {
        for resource in ["properties", "clients", "documents", "users"] {
            let (status, body) = call(router(), "GET", &format!("/api/{resource}")).await;
            assert_eq!(status, StatusCode::OK, "{resource}");
            assert_eq!(body["meta"]["pagination"]["total"], 0);

            let (status, _) = call(router(), "DELETE", &format!("/api/{resource}/1")).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{resource}");
        }
    }

    #[tokio::test]
    async fn test_health_and_fallback() {
        let (status, body) = call(router(), "GET", "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["storage"], "memory");

        let (status, body) = call(router(), "GET", "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Route not found");
    }
}
