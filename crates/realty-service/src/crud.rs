//! Generic CRUD service.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use realty_core::error::AppError;
use realty_core::result::AppResult;
use realty_core::traits::{Entity, Repository, ResourceService};
use realty_core::types::{EntityId, PaginatedResult, PaginationParams};

use crate::hooks::ServiceHooks;

/// Service implementation shared by every resource.
///
/// Orchestrates a [`Repository`], assembles pagination metadata and runs
/// the resource's [`ServiceHooks`]. Update and delete check existence
/// first; the check and the write are not atomic.
pub struct CrudService<E, C, U, F> {
    repository: Arc<dyn Repository<E, C, U, F>>,
    hooks: ServiceHooks<E, C, U, F>,
}

impl<E, C, U, F> CrudService<E, C, U, F>
where
    E: Entity,
    C: Send + 'static,
    U: Send + 'static,
    F: Send + Sync + 'static,
{
    /// Create a service with identity hooks.
    pub fn new(repository: Arc<dyn Repository<E, C, U, F>>) -> Self {
        Self::with_hooks(repository, ServiceHooks::default())
    }

    /// Create a service with the given hooks.
    pub fn with_hooks(
        repository: Arc<dyn Repository<E, C, U, F>>,
        hooks: ServiceHooks<E, C, U, F>,
    ) -> Self {
        Self { repository, hooks }
    }
}

impl<E, C, U, F> fmt::Debug for CrudService<E, C, U, F>
where
    E: Entity,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudService")
            .field("resource", &E::RESOURCE)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[async_trait]
impl<E, C, U, F> ResourceService<E, C, U, F> for CrudService<E, C, U, F>
where
    E: Entity,
    C: Send + 'static,
    U: Send + 'static,
    F: Send + Sync + 'static,
{
    async fn find_all(
        &self,
        filters: F,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<E>> {
        let filters = self.hooks.filters(filters);
        let window = pagination.window();

        let (data, total) = tokio::try_join!(
            self.repository.find_many(&filters, window),
            self.repository.count(&filters),
        )?;

        debug!(
            resource = E::RESOURCE,
            page = pagination.page,
            limit = pagination.limit,
            total,
            "Listed entities"
        );
        Ok(PaginatedResult::new(data, pagination, total))
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<E>> {
        self.repository.find_by_id(id).await
    }

    async fn find_by_id_or_fail(&self, id: EntityId) -> AppResult<E> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(E::RESOURCE, id))
    }

    async fn create(&self, input: C) -> AppResult<E> {
        let input = self.hooks.create_input(input)?;
        let created = self.repository.create(input).await?;
        info!(resource = E::RESOURCE, id = created.id(), "Entity created");
        Ok(created)
    }

    async fn update(&self, id: EntityId, input: U) -> AppResult<E> {
        let existing = self.find_by_id_or_fail(id).await?;
        let input = self.hooks.update_input(input, &existing)?;
        let updated = self.repository.update(id, input).await?;
        info!(resource = E::RESOURCE, id, "Entity updated");
        Ok(updated)
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        self.find_by_id_or_fail(id).await?;
        self.repository.delete(id).await?;
        info!(resource = E::RESOURCE, id, "Entity deleted");
        Ok(())
    }

    async fn exists(&self, id: EntityId) -> AppResult<bool> {
        self.repository.exists(id).await
    }
}
