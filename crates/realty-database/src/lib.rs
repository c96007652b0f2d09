//! # realty-database
//!
//! Persistence for the Realty backend: the PostgreSQL pool and schema check,
//! the two [`RecordStore`](realty_core::traits::RecordStore) backends, and
//! the generic [`CrudRepository`] with one predicate builder per resource.

pub mod connection;
pub mod repositories;
pub mod schema;
pub mod store;

pub use connection::{DatabasePool, StorageHealth};
pub use repositories::{CrudRepository, RepositoryConfig};
pub use store::{MemoryStore, PgStore};
