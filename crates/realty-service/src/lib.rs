//! # realty-service
//!
//! Business logic layer for the Realty backend. A single generic
//! [`CrudService`] implements
//! [`ResourceService`](realty_core::traits::ResourceService) for every
//! resource; resources differ only in the [`ServiceHooks`] they install.
//!
//! Services follow constructor injection: repositories are provided at
//! construction time as `Arc<dyn Repository<..>>`.

pub mod crud;
pub mod hooks;
pub mod password;
pub mod resources;

pub use crud::CrudService;
pub use hooks::ServiceHooks;
pub use password::PasswordHasher;
