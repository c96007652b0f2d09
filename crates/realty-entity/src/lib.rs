//! # realty-entity
//!
//! Domain entity models for the Realty backend. Every resource module
//! holds the persisted entity, its create/update inputs (validated with
//! `validator`) and its list filters. Entities derive `Serialize` and
//! `Deserialize` because record stores hand rows back as JSON objects.

pub mod client;
pub mod document;
pub mod property;
pub mod user;

pub use client::{Client, ClientFilters, ClientType, CreateClient, UpdateClient};
pub use document::{CreateDocument, Document, DocumentFilters, DocumentType, UpdateDocument};
pub use property::{
    CreateProperty, Property, PropertyFilters, PropertyStatus, PropertyType, UpdateProperty,
};
pub use user::{CreateUser, UpdateUser, User, UserFilters, UserRole};
