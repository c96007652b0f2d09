//! Client entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use realty_core::traits::Entity;
use realty_core::types::{EntityId, nullable};

/// Relationship of a client to the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    /// Looking to buy.
    Buyer,
    /// Selling a property.
    Seller,
    /// Looking to rent.
    Tenant,
    /// Letting a property.
    Landlord,
}

impl ClientType {
    /// Return the type as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Tenant => "tenant",
            Self::Landlord => "landlord",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client of the agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier.
    pub id: EntityId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email, stored lowercase.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Relationship to the agency.
    pub client_type: ClientType,
    /// City of residence.
    pub city: Option<String>,
    /// Internal notes.
    pub notes: Option<String>,
    /// When the client was created.
    pub created_at: DateTime<Utc>,
    /// When the client was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Client {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Client {
    const RESOURCE: &'static str = "Client";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Data required to create a new client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClient {
    /// Given name.
    #[validate(length(min = 1, max = 100, message = "first_name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100, message = "last_name is required"))]
    pub last_name: String,
    /// Contact email.
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5, max = 30))]
    pub phone: Option<String>,
    /// Relationship to the agency.
    pub client_type: ClientType,
    /// City of residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub city: Option<String>,
    /// Internal notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// Partial update of a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateClient {
    /// New given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    /// New email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    /// New phone.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 5, max = 30))]
    pub phone: Option<Option<String>>,
    /// New relationship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    /// New city.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub city: Option<Option<String>>,
    /// New notes.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub notes: Option<Option<String>>,
}
