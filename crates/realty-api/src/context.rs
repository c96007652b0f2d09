//! Framework-independent request context consumed by controllers.

use std::collections::HashMap;

use axum::body::Bytes;
use serde_json::Value;

use realty_core::error::AppError;
use realty_core::result::AppResult;

/// Everything a controller reads from a request.
///
/// Built by the axum handlers, or directly in tests.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    params: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Bytes,
    request_id: Option<String>,
}

impl RequestContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replace the query parameters.
    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Add one query parameter.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Set the raw request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the body from a JSON value.
    pub fn with_json(self, body: &Value) -> Self {
        self.with_body(body.to_string())
    }

    /// Set the request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.set_request_id(request_id);
        self
    }

    /// Set the request id in place.
    pub fn set_request_id(&mut self, request_id: impl Into<String>) {
        self.request_id = Some(request_id.into());
    }

    /// The request id, if one was assigned.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// A path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// A query parameter by name.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// All query parameters.
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query
    }

    /// Parse the body as JSON.
    ///
    /// An empty or malformed body is an `INVALID_INPUT` error.
    pub fn json_body(&self) -> AppResult<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::invalid_input("Request body is required"));
        }
        serde_json::from_slice(&self.body)
            .map_err(|e| AppError::invalid_input(format!("Malformed JSON body: {e}")))
    }
}
