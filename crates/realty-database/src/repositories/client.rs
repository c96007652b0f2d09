//! Client repository wiring.

use std::sync::Arc;

use realty_core::traits::RecordStore;
use realty_core::types::{FilterField, Predicate};
use realty_entity::client::{Client, ClientFilters, CreateClient, UpdateClient};

use super::crud::{CrudRepository, RepositoryConfig};
use super::property::non_blank;

/// Repository for clients.
pub type ClientRepository = CrudRepository<Client, CreateClient, UpdateClient, ClientFilters>;

/// Clients are soft-deleted.
pub const CLIENTS: RepositoryConfig = RepositoryConfig {
    table: "clients",
    soft_delete: true,
};

/// Build the client repository over `store`.
pub fn client_repository(store: Arc<dyn RecordStore>) -> ClientRepository {
    CrudRepository::new(store, CLIENTS, client_predicate)
}

/// Translate client filters into a storage predicate.
pub fn client_predicate(filters: &ClientFilters) -> Predicate {
    let mut predicate = Predicate::All;
    if let Some(kind) = filters.client_type {
        predicate = predicate.and(FilterField::eq("client_type", kind.as_str()));
    }
    if let Some(email) = non_blank(filters.email.as_deref()) {
        predicate = predicate.and(FilterField::eq("email", email.to_lowercase()));
    }
    if let Some(city) = non_blank(filters.city.as_deref()) {
        predicate = predicate.and(FilterField::eq("city", city));
    }
    if let Some(search) = non_blank(filters.search.as_deref()) {
        predicate = predicate.and(Predicate::any_of([
            FilterField::contains("first_name", search),
            FilterField::contains("last_name", search),
        ]));
    }
    predicate
}
