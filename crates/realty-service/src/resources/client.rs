//! Client business rules.

use std::sync::Arc;

use realty_core::traits::Repository;
use realty_entity::client::{Client, ClientFilters, CreateClient, UpdateClient};

use crate::crud::CrudService;
use crate::hooks::ServiceHooks;

/// Service for clients.
pub type ClientService = CrudService<Client, CreateClient, UpdateClient, ClientFilters>;

/// Hooks applied to client operations.
pub fn client_hooks() -> ServiceHooks<Client, CreateClient, UpdateClient, ClientFilters> {
    ServiceHooks::new()
        .with_create_input(|mut input: CreateClient| {
            input.email = normalize_email(&input.email);
            Ok(input)
        })
        .with_update_input(|mut input: UpdateClient, _existing: &Client| {
            input.email = input.email.as_deref().map(normalize_email);
            Ok(input)
        })
}

/// Build the client service over `repository`.
pub fn client_service(
    repository: Arc<dyn Repository<Client, CreateClient, UpdateClient, ClientFilters>>,
) -> ClientService {
    CrudService::with_hooks(repository, client_hooks())
}

/// Emails are stored trimmed and lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
