//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod logging;
pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_of};
