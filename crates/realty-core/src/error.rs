//! Unified application error types for Realty.
//!
//! Every layer maps its internal failures into [`AppError`] for consistent
//! propagation through the `?` operator. The error carries an explicit
//! [`ErrorKind`] discriminant that the HTTP boundary matches exhaustively,
//! and a numeric [`ErrorCode`] that is rendered to clients.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller does not have permission to perform the action.
    Forbidden,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, invalid state change, etc.).
    Conflict,
    /// The record store failed.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An unexpected internal error occurred.
    Internal,
}

impl ErrorKind {
    /// HTTP status code associated with this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Database | Self::Configuration | Self::Serialization | Self::Internal => 500,
        }
    }

    /// Application error code used when none is given explicitly.
    pub fn default_code(&self) -> ErrorCode {
        match self {
            Self::Validation => ErrorCode::ValidationError,
            Self::Unauthorized => ErrorCode::Unauthorized,
            Self::Forbidden => ErrorCode::Forbidden,
            Self::NotFound => ErrorCode::ResourceNotFound,
            Self::Conflict => ErrorCode::ResourceConflict,
            Self::Database => ErrorCode::DatabaseError,
            Self::Configuration => ErrorCode::ConfigurationError,
            Self::Serialization | Self::Internal => ErrorCode::InternalError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Numeric application error codes rendered in `error.code`.
///
/// Codes are grouped by thousand: 1xxx general, 2xxx auth, 3xxx resource,
/// 4xxx persistence, 5xxx configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// Unexpected server-side failure.
    InternalError = 1000,
    /// Malformed request input (bad path parameter, unparseable body).
    InvalidInput = 1001,
    /// Well-formed input rejected by a schema.
    ValidationError = 1002,
    /// Missing or invalid credentials.
    Unauthorized = 2001,
    /// Authenticated but not allowed.
    Forbidden = 2003,
    /// Entity does not exist or is soft-deleted.
    ResourceNotFound = 3001,
    /// Entity state conflicts with the request.
    ResourceConflict = 3002,
    /// Record store failure.
    DatabaseError = 4001,
    /// Invalid or missing configuration.
    ConfigurationError = 5001,
}

impl ErrorCode {
    /// Numeric value of the code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Symbolic name of the code, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ResourceConflict => "RESOURCE_CONFLICT",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::ConfigurationError => "CONFIGURATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

/// The unified application error used throughout Realty.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// The application error code.
    pub code: ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// Structured details, e.g. the offending field of a validation error.
    pub details: Option<serde_json::Value>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.default_code(),
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    /// Attach structured details.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Override the application error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Whether this error is a server-side failure (status >= 500).
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a validation error for malformed input such as a bad path parameter.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message).with_code(ErrorCode::InvalidInput)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a not-found error for an entity of the given resource.
    pub fn entity_not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::not_found(format!("{resource} with id {id} not found"))
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
