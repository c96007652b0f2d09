//! Client list filters.

use serde::Deserialize;
use validator::Validate;

use super::model::ClientType;

/// Query filters accepted by `GET /api/clients`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct ClientFilters {
    #[serde(default)]
    pub client_type: Option<ClientType>,
    /// Exact email match, compared lowercase.
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Case-insensitive substring of first or last name.
    #[serde(default)]
    pub search: Option<String>,
}
