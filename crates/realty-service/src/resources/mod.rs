//! Per-resource services: type aliases, hooks and constructors.

pub mod client;
pub mod document;
pub mod property;
pub mod user;

pub use client::{ClientService, client_service};
pub use document::{DocumentService, document_service};
pub use property::{PropertyService, property_service};
pub use user::{UserService, user_service};
