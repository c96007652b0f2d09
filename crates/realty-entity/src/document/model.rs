//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use realty_core::traits::Entity;
use realty_core::types::{EntityId, nullable};

/// Category of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Contract,
    Deed,
    Inspection,
    Identification,
    Other,
}

impl DocumentType {
    /// Return the type as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Deed => "deed",
            Self::Inspection => "inspection",
            Self::Identification => "identification",
            Self::Other => "other",
        }
    }
}

/// A document attached to a property and/or a client.
///
/// Documents are hard-deleted, so there is no `deleted_at` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: EntityId,
    /// Display title.
    pub title: String,
    /// Category.
    pub document_type: DocumentType,
    /// Where the file is stored.
    pub file_url: String,
    /// Related property.
    pub property_id: Option<EntityId>,
    /// Related client.
    pub client_id: Option<EntityId>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Entity for Document {
    const RESOURCE: &'static str = "Document";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Data required to register a document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocument {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    pub document_type: DocumentType,
    #[validate(url(message = "file_url must be a valid URL"))]
    pub file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub property_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub client_id: Option<EntityId>,
}

/// Partial update of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "file_url must be a valid URL"))]
    pub file_url: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub property_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub client_id: Option<Option<EntityId>>,
}
