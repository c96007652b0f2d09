//! Maps domain `AppError` to controller responses.
//!
//! This is the only place that decides what a client sees of a failure.
//! Client errors pass through with their own message, code and details.
//! Server errors are logged in full and replaced by a generic message.

use std::error::Error as StdError;

use axum::http::StatusCode;
use tracing::error;

use realty_core::error::{AppError, ErrorKind};

use crate::response::ControllerResponse;

/// Convert `err` into an error envelope.
///
/// `fallback` is the message shown for server-side failures.
pub fn map_error(
    controller: &str,
    err: AppError,
    request_id: Option<&str>,
    fallback: &str,
) -> ControllerResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match err.kind {
        ErrorKind::Validation
        | ErrorKind::NotFound
        | ErrorKind::Unauthorized
        | ErrorKind::Forbidden
        | ErrorKind::Conflict => ControllerResponse::error(status, err.message, err.code, err.details),
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => {
            error!(
                controller,
                code = err.code.as_u16(),
                code_name = %err.code,
                request_id = request_id.unwrap_or("-"),
                error = %error_chain(&err),
                "Request failed"
            );
            ControllerResponse::error(status, fallback, err.code, None)
        }
    }
}

/// The error and all its sources, outermost first.
fn error_chain(err: &AppError) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
