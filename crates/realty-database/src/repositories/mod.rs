//! Repositories for all Realty resources.
//!
//! There is one generic implementation, [`CrudRepository`]; each resource
//! contributes only its table settings and its filter-to-predicate mapping.

pub mod client;
pub mod crud;
pub mod document;
pub mod property;
pub mod user;

pub use client::{ClientRepository, client_repository};
pub use crud::{CrudRepository, PredicateBuilder, RepositoryConfig};
pub use document::{DocumentRepository, document_repository};
pub use property::{PropertyRepository, property_repository};
pub use user::{UserRepository, user_repository};
