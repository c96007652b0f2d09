//! Record store trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{EntityId, Predicate, QueryWindow};

/// One row, keyed by column name.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Row-oriented storage consumed by the generic repository.
///
/// Implementations exist for PostgreSQL and an in-process store. The
/// [`RecordStore`] trait is defined here in `realty-core` and implemented
/// in `realty-database`. Failures of any kind are reported as
/// [`ErrorKind::Database`](crate::error::ErrorKind::Database).
///
/// Rows are returned in ascending `id` order.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "postgres", "memory").
    fn backend(&self) -> &'static str;

    /// Rows of `table` matching `predicate`, restricted to `window`.
    async fn select(
        &self,
        table: &str,
        predicate: &Predicate,
        window: QueryWindow,
    ) -> AppResult<Vec<Record>>;

    /// Insert a row and return it with generated `id`, `created_at` and `updated_at`.
    async fn insert(&self, table: &str, values: Record) -> AppResult<Record>;

    /// Merge `values` into the row with the given id.
    ///
    /// Returns `None` when no such row exists.
    async fn update(&self, table: &str, id: EntityId, values: Record) -> AppResult<Option<Record>>;

    /// Physically remove a row. Returns `true` if a row was removed.
    async fn delete(&self, table: &str, id: EntityId) -> AppResult<bool>;

    /// Number of rows of `table` matching `predicate`.
    async fn count(&self, table: &str, predicate: &Predicate) -> AppResult<u64>;
}
