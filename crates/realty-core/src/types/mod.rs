//! Core type definitions used across the Realty workspace.

pub mod filter;
pub mod pagination;
pub mod patch;
pub mod predicate;
pub mod query;
pub mod response;

pub use filter::{FilterField, FilterOp, FilterValue};
pub use pagination::{PaginatedResult, PaginationMeta, PaginationParams, QueryWindow};
pub use patch::nullable;
pub use predicate::Predicate;
pub use response::{ErrorEnvelope, ResponseMeta, SuccessEnvelope};

/// Primary key of every entity. Assigned by the record store, never reused.
pub type EntityId = i64;
