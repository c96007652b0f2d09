//! User list filters.

use serde::Deserialize;
use validator::Validate;

use realty_core::types::query::opt_from_str;

use super::role::UserRole;

/// Query filters accepted by `GET /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct UserFilters {
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "opt_from_str")]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
}
