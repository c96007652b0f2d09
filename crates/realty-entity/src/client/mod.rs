//! Client domain entities.

pub mod filter;
pub mod model;

pub use filter::ClientFilters;
pub use model::{Client, ClientType, CreateClient, UpdateClient};
