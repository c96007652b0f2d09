//! User business rules: passwords are hashed before they are stored.

use std::sync::Arc;

use realty_core::traits::Repository;
use realty_entity::user::{CreateUser, UpdateUser, User, UserFilters};

use super::client::normalize_email;
use crate::crud::CrudService;
use crate::hooks::ServiceHooks;
use crate::password::PasswordHasher;

/// Service for users.
pub type UserService = CrudService<User, CreateUser, UpdateUser, UserFilters>;

/// Hooks applied to user operations.
pub fn user_hooks(
    hasher: Arc<PasswordHasher>,
) -> ServiceHooks<User, CreateUser, UpdateUser, UserFilters> {
    let on_update = Arc::clone(&hasher);
    ServiceHooks::new()
        .with_create_input(move |mut input: CreateUser| {
            input.email = normalize_email(&input.email);
            input.password = hasher.hash_password(&input.password)?;
            Ok(input)
        })
        .with_update_input(move |mut input: UpdateUser, _existing: &User| {
            input.email = input.email.as_deref().map(normalize_email);
            input.password = input
                .password
                .as_deref()
                .map(|password| on_update.hash_password(password))
                .transpose()?;
            Ok(input)
        })
}

/// Build the user service over `repository`.
pub fn user_service(
    repository: Arc<dyn Repository<User, CreateUser, UpdateUser, UserFilters>>,
    hasher: Arc<PasswordHasher>,
) -> UserService {
    CrudService::with_hooks(repository, user_hooks(hasher))
}
