//! Filter types for dynamic query building.

use serde::{Deserialize, Serialize};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// SQL `LIKE` pattern match (`%` wildcard).
    Like,
    /// SQL `ILIKE` case-insensitive pattern match.
    ILike,
    /// SQL `IN` list membership.
    In,
    /// SQL `IS NULL` check.
    IsNull,
    /// SQL `IS NOT NULL` check.
    IsNotNull,
}

/// A dynamic filter value that can represent various SQL types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// A list of string values (for `IN` operator).
    StringList(Vec<String>),
    /// Null / no value (for `IS NULL`, `IS NOT NULL`).
    Null,
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A single filter condition on a named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The column or field name to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Shorthand for an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Eq, value.into())
    }

    /// Shorthand for a `>=` filter.
    pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Gte, value.into())
    }

    /// Shorthand for a `<=` filter.
    pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Lte, value.into())
    }

    /// Case-insensitive substring match on the literal `needle`.
    pub fn contains(field: impl Into<String>, needle: &str) -> Self {
        Self::new(
            field,
            FilterOp::ILike,
            FilterValue::String(format!("%{}%", escape_like(needle))),
        )
    }

    /// Shorthand for an `IS NULL` filter.
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, FilterOp::IsNull, FilterValue::Null)
    }
}

/// Escape `LIKE` wildcards so `text` matches only itself. The escape
/// character is a backslash.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
