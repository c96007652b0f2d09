//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::header::HeaderMap;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use realty_api::{AppState, build_app};
use realty_core::config::{AppConfig, StorageBackend};
use realty_core::traits::Record;
use realty_database::MemoryStore;

/// Test application context
#[derive(Clone)]
pub struct TestApp {
    /// The Axum application with the full middleware stack
    pub router: Router,
    /// The in-memory store behind every repository
    pub store: Arc<MemoryStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;

        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(config.clone(), store.clone(), None);
        let router = build_app(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, body_str, &[]).await
    }

    /// Make an HTTP request with a raw body and extra headers
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: impl Into<String>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a property and return its id
    pub async fn create_property(&self, title: &str, city: &str, price: f64) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/properties",
                Some(json!({
                    "title": title,
                    "property_type": "house",
                    "price": price,
                    "city": city,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.id()
    }

    /// A row as stored, including soft-deleted rows
    pub async fn raw_row(&self, table: &str, id: i64) -> Option<Record> {
        self.store.raw(table, id).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// `data.id` of a success envelope
    pub fn id(&self) -> i64 {
        self.body["data"]["id"]
            .as_i64()
            .expect("No data.id in response")
    }

    /// `error.code` of an error envelope
    pub fn error_code(&self) -> u64 {
        self.body["error"]["code"]
            .as_u64()
            .expect("No error.code in response")
    }
}
