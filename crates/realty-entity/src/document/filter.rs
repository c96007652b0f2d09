//! Document list filters.

use serde::Deserialize;
use validator::Validate;

use realty_core::types::EntityId;
use realty_core::types::query::opt_from_str;

use super::model::DocumentType;

/// Query filters accepted by `GET /api/documents`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct DocumentFilters {
    #[serde(default, deserialize_with = "opt_from_str")]
    #[validate(range(min = 1))]
    pub property_id: Option<EntityId>,
    #[serde(default, deserialize_with = "opt_from_str")]
    #[validate(range(min = 1))]
    pub client_id: Option<EntityId>,
    #[serde(default)]
    pub document_type: Option<DocumentType>,
}
