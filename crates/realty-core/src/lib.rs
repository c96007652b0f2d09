//! # realty-core
//!
//! Core crate for the Realty backend. Contains the layer traits of the
//! generic CRUD stack (record store, repository, service), configuration
//! schemas, pagination/filter/predicate types, the response envelope,
//! schema validation, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Realty crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{AppError, ErrorCode, ErrorKind};
pub use result::AppResult;
