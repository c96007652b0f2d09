//! User repository wiring.

use std::sync::Arc;

use realty_core::traits::RecordStore;
use realty_core::types::{FilterField, Predicate};
use realty_entity::user::{CreateUser, UpdateUser, User, UserFilters};

use super::crud::{CrudRepository, RepositoryConfig};
use super::property::non_blank;

/// Repository for users.
pub type UserRepository = CrudRepository<User, CreateUser, UpdateUser, UserFilters>;

/// Users are soft-deleted.
pub const USERS: RepositoryConfig = RepositoryConfig {
    table: "users",
    soft_delete: true,
};

/// Build the user repository over `store`.
pub fn user_repository(store: Arc<dyn RecordStore>) -> UserRepository {
    CrudRepository::new(store, USERS, user_predicate)
}

/// Translate user filters into a storage predicate.
pub fn user_predicate(filters: &UserFilters) -> Predicate {
    let mut predicate = Predicate::All;
    if let Some(role) = filters.role {
        predicate = predicate.and(FilterField::eq("role", role.as_str()));
    }
    if let Some(active) = filters.is_active {
        predicate = predicate.and(FilterField::eq("is_active", active));
    }
    if let Some(email) = non_blank(filters.email.as_deref()) {
        predicate = predicate.and(FilterField::eq("email", email.to_lowercase()));
    }
    predicate
}
