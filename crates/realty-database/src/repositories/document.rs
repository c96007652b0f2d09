//! Document repository wiring.

use std::sync::Arc;

use realty_core::traits::RecordStore;
use realty_core::types::{FilterField, Predicate};
use realty_entity::document::{CreateDocument, Document, DocumentFilters, UpdateDocument};

use super::crud::{CrudRepository, RepositoryConfig};

/// Repository for documents.
pub type DocumentRepository =
    CrudRepository<Document, CreateDocument, UpdateDocument, DocumentFilters>;

/// Documents are removed outright.
pub const DOCUMENTS: RepositoryConfig = RepositoryConfig {
    table: "documents",
    soft_delete: false,
};

/// Build the document repository over `store`.
pub fn document_repository(store: Arc<dyn RecordStore>) -> DocumentRepository {
    CrudRepository::new(store, DOCUMENTS, document_predicate)
}

/// Translate document filters into a storage predicate.
pub fn document_predicate(filters: &DocumentFilters) -> Predicate {
    let mut predicate = Predicate::All;
    if let Some(property_id) = filters.property_id {
        predicate = predicate.and(FilterField::eq("property_id", property_id));
    }
    if let Some(client_id) = filters.client_id {
        predicate = predicate.and(FilterField::eq("client_id", client_id));
    }
    if let Some(kind) = filters.document_type {
        predicate = predicate.and(FilterField::eq("document_type", kind.as_str()));
    }
    predicate
}
