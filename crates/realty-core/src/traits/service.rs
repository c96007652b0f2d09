//! Resource service trait consumed by controllers.

use async_trait::async_trait;

use super::entity::Entity;
use crate::result::AppResult;
use crate::types::{EntityId, PaginatedResult, PaginationParams};

/// Business operations over one resource.
///
/// All mutation paths go through [`ResourceService::find_by_id_or_fail`],
/// so updating or deleting a missing entity fails with a not-found error
/// before any write is issued.
#[async_trait]
pub trait ResourceService<E, C, U, F>: Send + Sync + 'static
where
    E: Entity,
    C: Send + 'static,
    U: Send + 'static,
    F: Send + Sync + 'static,
{
    /// One page of entities matching `filters`.
    async fn find_all(&self, filters: F, pagination: PaginationParams)
    -> AppResult<PaginatedResult<E>>;

    /// Find an entity by id.
    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<E>>;

    /// Find an entity by id or fail with a not-found error.
    async fn find_by_id_or_fail(&self, id: EntityId) -> AppResult<E>;

    /// Create an entity from validated input.
    async fn create(&self, input: C) -> AppResult<E>;

    /// Update an existing entity from validated input.
    async fn update(&self, id: EntityId, input: U) -> AppResult<E>;

    /// Delete an existing entity.
    async fn delete(&self, id: EntityId) -> AppResult<()>;

    /// Whether a visible entity with `id` exists.
    async fn exists(&self, id: EntityId) -> AppResult<bool>;
}
