//! Controller results and their HTTP rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use realty_core::error::{AppError, ErrorCode, ErrorKind};
use realty_core::result::AppResult;
use realty_core::types::{ErrorEnvelope, ResponseMeta, SuccessEnvelope};

/// Status and envelope produced by a controller operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Serialized envelope.
    pub body: Value,
}

impl ControllerResponse {
    /// Success envelope around `data`.
    pub fn success<T: Serialize>(status: StatusCode, data: T, meta: ResponseMeta) -> AppResult<Self> {
        let body = serde_json::to_value(SuccessEnvelope::new(data, meta)).map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Failed to serialize response", e)
        })?;
        Ok(Self { status, body })
    }

    /// Error envelope.
    pub fn error(
        status: StatusCode,
        message: impl Into<String>,
        code: ErrorCode,
        details: Option<Value>,
    ) -> Self {
        let envelope = ErrorEnvelope::new(message, code, details);
        Self {
            status,
            body: serde_json::to_value(envelope).unwrap_or(Value::Null),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl IntoResponse for ControllerResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
