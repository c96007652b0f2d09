//! Application state shared across all handlers and middleware.

use std::fmt;
use std::sync::Arc;

use realty_core::config::AppConfig;
use realty_core::traits::RecordStore;
use realty_database::DatabasePool;
use realty_database::repositories::{
    client_repository, document_repository, property_repository, user_repository,
};
use realty_service::PasswordHasher;
use realty_service::resources::{client_service, document_service, property_service, user_service};

use crate::endpoint::CrudEndpoint;
use crate::resources::{ClientController, DocumentController, PropertyController, UserController};

/// Application state containing all shared dependencies.
///
/// Passed to handlers via `State<AppState>`; each resource router gets its
/// own endpoint as state. All fields are `Arc`-wrapped for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record store shared by every repository.
    pub store: Arc<dyn RecordStore>,
    /// PostgreSQL pool when the postgres backend is active.
    pub database: Option<DatabasePool>,
    /// `/api/properties`
    pub properties: Arc<dyn CrudEndpoint>,
    /// `/api/clients`
    pub clients: Arc<dyn CrudEndpoint>,
    /// `/api/documents`
    pub documents: Arc<dyn CrudEndpoint>,
    /// `/api/users`
    pub users: Arc<dyn CrudEndpoint>,
}

impl AppState {
    /// Wire repositories, services and controllers for every resource over
    /// `store`.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>, database: Option<DatabasePool>) -> Self {
        let hasher = Arc::new(PasswordHasher::new());

        let properties = property_service(Arc::new(property_repository(Arc::clone(&store))));
        let clients = client_service(Arc::new(client_repository(Arc::clone(&store))));
        let documents = document_service(Arc::new(document_repository(Arc::clone(&store))));
        let users = user_service(Arc::new(user_repository(Arc::clone(&store))), hasher);

        Self {
            config: Arc::new(config),
            store,
            database,
            properties: Arc::new(PropertyController::new(Arc::new(properties))),
            clients: Arc::new(ClientController::new(Arc::new(clients))),
            documents: Arc::new(DocumentController::new(Arc::new(documents))),
            users: Arc::new(UserController::new(Arc::new(users))),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.store.backend())
            .field("database", &self.database.is_some())
            .finish_non_exhaustive()
    }
}
