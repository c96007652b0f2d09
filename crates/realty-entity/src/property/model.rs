//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use realty_core::traits::Entity;
use realty_core::types::{EntityId, nullable};

use super::status::{PropertyStatus, PropertyType};

/// A listed real-estate property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique property identifier.
    pub id: EntityId,
    /// Listing title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Kind of asset.
    pub property_type: PropertyType,
    /// Listing status.
    pub status: PropertyStatus,
    /// Asking price.
    pub price: f64,
    /// City the property is located in.
    pub city: String,
    /// Street address.
    pub address: Option<String>,
    /// Number of bedrooms.
    pub bedrooms: Option<i32>,
    /// Number of bathrooms.
    pub bathrooms: Option<i32>,
    /// Floor area in square meters.
    pub area_sqm: Option<f64>,
    /// Owning client.
    pub owner_id: Option<EntityId>,
    /// When the property was created.
    pub created_at: DateTime<Utc>,
    /// When the property was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Property {
    const RESOURCE: &'static str = "Property";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Data required to create a new property.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProperty {
    /// Listing title.
    #[validate(length(min = 3, max = 200, message = "title must be 3-200 characters"))]
    pub title: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// Kind of asset.
    pub property_type: PropertyType,
    /// Initial status; defaults to `available`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    /// Asking price.
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    /// City.
    #[validate(length(min = 1, max = 100, message = "city is required"))]
    pub city: String,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 300))]
    pub address: Option<String>,
    /// Number of bedrooms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: Option<i32>,
    /// Number of bathrooms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub bathrooms: Option<i32>,
    /// Floor area in square meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub area_sqm: Option<f64>,
    /// Owning client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub owner_id: Option<EntityId>,
}

/// Partial update of a property; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProperty {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 200, message = "title must be 3-200 characters"))]
    pub title: Option<String>,
    /// New description.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<Option<String>>,
    /// New asset kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    /// New price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    /// New city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    /// New address.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 300))]
    pub address: Option<Option<String>>,
    /// New bedroom count.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub bedrooms: Option<Option<i32>>,
    /// New bathroom count.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 100))]
    pub bathrooms: Option<Option<i32>>,
    /// New floor area.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub area_sqm: Option<Option<f64>>,
    /// New owner.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub owner_id: Option<Option<EntityId>>,
}
