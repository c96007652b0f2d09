//! The uniform response envelope.
//!
//! ```text
//! Success: { success: true,  data: <T>, meta?: { pagination?, requestId? } }
//! Error:   { success: false, error: { message, code, details? } }
//! ```
//!
//! Optional members are omitted rather than rendered as `null`.

use serde::Serialize;

use super::pagination::PaginationMeta;
use crate::error::ErrorCode;

/// Optional metadata attached to a success envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Page metadata for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    /// Correlation id of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ResponseMeta {
    /// Whether no member is set.
    pub fn is_empty(&self) -> bool {
        self.pagination.is_none() && self.request_id.is_none()
    }
}

/// `{ success: true, data, meta? }`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T: Serialize> {
    /// Always `true`.
    pub success: bool,
    /// Response payload.
    pub data: T,
    /// Optional metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl<T: Serialize> SuccessEnvelope<T> {
    /// Wrap `data`; an empty `meta` is dropped.
    pub fn new(data: T, meta: ResponseMeta) -> Self {
        Self {
            success: true,
            data,
            meta: (!meta.is_empty()).then_some(meta),
        }
    }
}

/// The `error` member of an error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable message safe to show to the client.
    pub message: String,
    /// Numeric application error code.
    pub code: ErrorCode,
    /// Structured details (validation errors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// `{ success: false, error }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Error description.
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    /// Build an error envelope.
    pub fn new(
        message: impl Into<String>,
        code: ErrorCode,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                message: message.into(),
                code,
                details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::pagination::PaginationParams;

    #[test]
    fn test_success_without_meta() {
        let body = serde_json::to_value(SuccessEnvelope::new(json!({"id": 1}), ResponseMeta::default()))
            .unwrap();
        assert_eq!(body, json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn test_success_with_pagination_and_request_id() {
        let meta = ResponseMeta {
            pagination: Some(PaginationMeta::new(PaginationParams::default(), 3)),
            request_id: Some("req-1".to_string()),
        };
        let body = serde_json::to_value(SuccessEnvelope::new(Vec::<i32>::new(), meta)).unwrap();
        assert_eq!(body["meta"]["requestId"], "req-1");
        assert_eq!(body["meta"]["pagination"]["total"], 3);
    }

    #[test]
    fn test_error_omits_missing_details() {
        let body = serde_json::to_value(ErrorEnvelope::new(
            "Property with id 9 not found",
            ErrorCode::ResourceNotFound,
            None,
        ))
        .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], 3001);
        assert!(body["error"].get("details").is_none());
    }
}
