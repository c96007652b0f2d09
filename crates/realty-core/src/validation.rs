//! Input schemas: JSON → typed, validated input.
//!
//! Controllers never hand raw JSON to services. Request bodies and query
//! filters go through a [`Schema`], which either yields the typed value or
//! the first offending field path with its message.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::AppError;

/// Path used when a failure cannot be attributed to a single field.
const ROOT_PATH: &str = "body";

/// The first validation failure of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Dotted field path, e.g. `address.city` or `tags[2]`.
    pub path: String,
    /// Human-readable message.
    pub message: String,
}

impl SchemaError {
    /// Create a schema error.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<SchemaError> for AppError {
    fn from(err: SchemaError) -> Self {
        AppError::validation(format!("Validation failed: {}: {}", err.path, err.message))
            .with_details(json!({ "field": err.path, "message": err.message }))
    }
}

/// Validates untyped input into `T`.
pub trait Schema<T>: Send + Sync + 'static {
    /// Parse and validate `input`.
    fn validate(&self, input: &Value) -> Result<T, SchemaError>;
}

/// Schema backed by `serde` deserialization followed by `validator` rules.
///
/// Unknown keys are ignored unless `T` opts into `deny_unknown_fields`.
pub struct JsonSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSchema<T> {
    /// Create a schema for `T`.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchema")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Schema<T> for JsonSchema<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    fn validate(&self, input: &Value) -> Result<T, SchemaError> {
        let value: T = serde_path_to_error::deserialize(input.clone()).map_err(from_serde)?;
        value.validate().map_err(|errors| {
            first_error(&errors, "")
                .unwrap_or_else(|| SchemaError::new(ROOT_PATH, "Invalid input"))
        })?;
        Ok(value)
    }
}

/// Map a deserialization failure to the path where it happened.
///
/// `missing field` errors are reported at the enclosing struct, so the field
/// name is appended from the message.
fn from_serde(err: serde_path_to_error::Error<serde_json::Error>) -> SchemaError {
    let path = err.path().to_string();
    let prefix = if path == "." { "" } else { path.as_str() };
    let message = err.inner().to_string();

    if let Some(field) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        return SchemaError::new(path, format!("{field} is required"));
    }
    if prefix.is_empty() {
        return SchemaError::new(ROOT_PATH, message);
    }
    SchemaError::new(prefix, message)
}

/// First failure in field-name order, descending into nested structs and lists.
fn first_error(errors: &ValidationErrors, prefix: &str) -> Option<SchemaError> {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by_key(|(field, _)| field.to_string());

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(err) = list.first() {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{path} is invalid ({})", err.code));
                    return Some(SchemaError::new(path, message));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(found) = first_error(inner, &path) {
                    return Some(found);
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    if let Some(found) = first_error(inner, &format!("{path}[{index}]")) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}
