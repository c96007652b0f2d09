//! User domain entities.

pub mod filter;
pub mod model;
pub mod role;

pub use filter::UserFilters;
pub use model::{CreateUser, UpdateUser, User};
pub use role::UserRole;
