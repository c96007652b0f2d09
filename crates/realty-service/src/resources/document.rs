//! Document service wiring. Documents carry no extra business rules.

use std::sync::Arc;

use realty_core::traits::Repository;
use realty_entity::document::{CreateDocument, Document, DocumentFilters, UpdateDocument};

use crate::crud::CrudService;

/// Service for documents.
pub type DocumentService = CrudService<Document, CreateDocument, UpdateDocument, DocumentFilters>;

/// Build the document service over `repository`.
pub fn document_service(
    repository: Arc<dyn Repository<Document, CreateDocument, UpdateDocument, DocumentFilters>>,
) -> DocumentService {
    CrudService::new(repository)
}
