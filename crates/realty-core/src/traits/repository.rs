//! Generic repository trait for entity persistence.

use async_trait::async_trait;

use super::entity::Entity;
use crate::result::AppResult;
use crate::types::{EntityId, QueryWindow};

/// Generic CRUD repository trait.
///
/// Parameterized by the entity `E`, its create input `C`, update input `U`
/// and filter type `F`. The repository is the sole owner of filter
/// translation and soft-delete visibility: every read hides soft-deleted
/// rows when soft delete is enabled for the resource.
#[async_trait]
pub trait Repository<E, C, U, F>: Send + Sync + 'static
where
    E: Entity,
    C: Send + 'static,
    U: Send + 'static,
    F: Send + Sync + 'static,
{
    /// Entities matching `filters` within `window`. No upper bound is
    /// enforced on `window.limit` here.
    async fn find_many(&self, filters: &F, window: QueryWindow) -> AppResult<Vec<E>>;

    /// Find a visible entity by id; absent or soft-deleted yields `None`.
    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<E>>;

    /// Insert a new entity and return the persisted row.
    async fn create(&self, data: C) -> AppResult<E>;

    /// Merge `data` plus a fresh `updated_at` into the row with `id`.
    ///
    /// Callers must check existence first; a row that vanished in between
    /// surfaces as a database error.
    async fn update(&self, id: EntityId, data: U) -> AppResult<E>;

    /// Soft- or hard-delete the row with `id`.
    async fn delete(&self, id: EntityId) -> AppResult<()>;

    /// Number of visible entities matching `filters`.
    async fn count(&self, filters: &F) -> AppResult<u64>;

    /// Whether a visible entity with `id` exists.
    async fn exists(&self, id: EntityId) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
