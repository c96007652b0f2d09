//! Property list filters.

use serde::Deserialize;
use validator::Validate;

use realty_core::types::EntityId;
use realty_core::types::query::opt_from_str;

use super::status::{PropertyStatus, PropertyType};

/// Query filters accepted by `GET /api/properties`.
///
/// Unknown query keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct PropertyFilters {
    /// Exact city match.
    #[serde(default)]
    pub city: Option<String>,
    /// Asset kind.
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    /// Listing status.
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    /// Lower price bound (inclusive).
    #[serde(default, deserialize_with = "opt_from_str")]
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    /// Upper price bound (inclusive).
    #[serde(default, deserialize_with = "opt_from_str")]
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    /// Minimum bedroom count.
    #[serde(default, deserialize_with = "opt_from_str")]
    #[validate(range(min = 0))]
    pub min_bedrooms: Option<i32>,
    /// Owning client.
    #[serde(default, deserialize_with = "opt_from_str")]
    pub owner_id: Option<EntityId>,
    /// Case-insensitive substring of the title.
    #[serde(default)]
    pub search: Option<String>,
}
