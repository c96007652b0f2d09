//! Core traits defined in `realty-core` and implemented by other crates.

pub mod entity;
pub mod repository;
pub mod service;
pub mod store;

pub use entity::Entity;
pub use repository::Repository;
pub use service::ResourceService;
pub use store::{Record, RecordStore};
