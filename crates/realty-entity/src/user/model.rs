//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use realty_core::traits::Entity;
use realty_core::types::EntityId;

use super::role::UserRole;

/// A back-office user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: EntityId,
    /// Login email, unique.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Human-readable name.
    pub full_name: String,
    /// User role.
    pub role: UserRole,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    const RESOURCE: &'static str = "User";

    fn id(&self) -> EntityId {
        self.id
    }
}

fn default_active() -> bool {
    true
}

/// Data required to create a new user.
///
/// `password` arrives in plain text and is replaced by its hash before the
/// input reaches the repository; it is persisted as `password_hash`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(rename(serialize = "password_hash"))]
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 200, message = "full_name is required"))]
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    /// New plain-text password; hashed before persisting.
    #[serde(
        default,
        rename(serialize = "password_hash"),
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
