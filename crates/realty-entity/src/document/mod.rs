//! Document domain entities.

pub mod filter;
pub mod model;

pub use filter::DocumentFilters;
pub use model::{CreateDocument, Document, DocumentType, UpdateDocument};
