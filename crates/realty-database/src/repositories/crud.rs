//! Generic repository over a [`RecordStore`].

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use realty_core::error::{AppError, ErrorKind};
use realty_core::result::AppResult;
use realty_core::traits::{Entity, Record, RecordStore, Repository};
use realty_core::types::{EntityId, FilterField, Predicate, QueryWindow};

use crate::store::timestamp_now;

/// Column holding the soft-delete marker.
pub const DELETED_AT: &str = "deleted_at";

/// Column refreshed on every update.
pub const UPDATED_AT: &str = "updated_at";

/// Translates a resource's filters into a storage predicate.
pub type PredicateBuilder<F> = Arc<dyn Fn(&F) -> Predicate + Send + Sync>;

/// Static per-resource repository settings.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryConfig {
    /// Backing table.
    pub table: &'static str,
    /// Whether deletes mark `deleted_at` instead of removing the row.
    pub soft_delete: bool,
}

/// Repository implementation shared by every resource.
///
/// Soft-deleted rows are hidden from every read when `soft_delete` is on.
/// Storage failures are logged with the repository name and operation and
/// surface as [`ErrorKind::Database`].
pub struct CrudRepository<E, C, U, F> {
    store: Arc<dyn RecordStore>,
    config: RepositoryConfig,
    build_predicate: PredicateBuilder<F>,
    name: String,
    _marker: PhantomData<fn() -> (E, C, U)>,
}

impl<E, C, U, F> CrudRepository<E, C, U, F>
where
    E: Entity,
{
    /// Create a repository over `store`.
    pub fn new(
        store: Arc<dyn RecordStore>,
        config: RepositoryConfig,
        build_predicate: impl Fn(&F) -> Predicate + Send + Sync + 'static,
    ) -> Self {
        Self {
            store,
            config,
            build_predicate: Arc::new(build_predicate),
            name: format!("{}Repository", E::RESOURCE),
            _marker: PhantomData,
        }
    }

    /// Repository settings.
    pub fn config(&self) -> RepositoryConfig {
        self.config
    }

    /// Restrict `predicate` to rows that are not soft-deleted.
    fn visible(&self, predicate: Predicate) -> Predicate {
        if self.config.soft_delete {
            predicate.and(FilterField::is_null(DELETED_AT))
        } else {
            predicate
        }
    }

    /// Log a failed operation and make sure it carries the database kind.
    fn fail(&self, operation: &'static str, err: AppError) -> AppError {
        error!(
            repository = %self.name,
            operation,
            table = self.config.table,
            error = %err,
            "Repository operation failed"
        );
        if err.kind == ErrorKind::Database {
            err
        } else {
            AppError::with_source(
                ErrorKind::Database,
                format!("{} {operation} failed", self.name),
                err,
            )
        }
    }

    fn to_record<T: Serialize>(&self, operation: &'static str, value: &T) -> AppResult<Record> {
        match serde_json::to_value(value) {
            Ok(Value::Object(record)) => Ok(record),
            Ok(other) => Err(self.fail(
                operation,
                AppError::database(format!("Expected an object for {}, got {other}", E::RESOURCE)),
            )),
            Err(e) => Err(self.fail(
                operation,
                AppError::with_source(ErrorKind::Database, "Failed to encode record", e),
            )),
        }
    }

    fn to_entity(&self, operation: &'static str, record: Record) -> AppResult<E> {
        serde_json::from_value(Value::Object(record)).map_err(|e| {
            self.fail(
                operation,
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to decode {} row", E::RESOURCE),
                    e,
                ),
            )
        })
    }
}

impl<E, C, U, F> fmt::Debug for CrudRepository<E, C, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudRepository")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("backend", &self.store.backend())
            .finish()
    }
}

#[async_trait]
impl<E, C, U, F> Repository<E, C, U, F> for CrudRepository<E, C, U, F>
where
    E: Entity,
    C: Serialize + Send + Sync + 'static,
    U: Serialize + Send + Sync + 'static,
    F: Send + Sync + 'static,
{
    async fn find_many(&self, filters: &F, window: QueryWindow) -> AppResult<Vec<E>> {
        let predicate = self.visible((self.build_predicate)(filters));
        let records = self
            .store
            .select(self.config.table, &predicate, window)
            .await
            .map_err(|e| self.fail("find_many", e))?;
        records
            .into_iter()
            .map(|record| self.to_entity("find_many", record))
            .collect()
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<E>> {
        let predicate = self.visible(FilterField::eq("id", id).into());
        let window = QueryWindow {
            limit: 1,
            offset: 0,
        };
        let records = self
            .store
            .select(self.config.table, &predicate, window)
            .await
            .map_err(|e| self.fail("find_by_id", e))?;
        records
            .into_iter()
            .next()
            .map(|record| self.to_entity("find_by_id", record))
            .transpose()
    }

    async fn create(&self, data: C) -> AppResult<E> {
        let record = self.to_record("create", &data)?;
        let inserted = self
            .store
            .insert(self.config.table, record)
            .await
            .map_err(|e| self.fail("create", e))?;
        self.to_entity("create", inserted)
    }

    async fn update(&self, id: EntityId, data: U) -> AppResult<E> {
        let mut record = self.to_record("update", &data)?;
        record.insert(UPDATED_AT.to_string(), timestamp_now());
        let updated = self
            .store
            .update(self.config.table, id, record)
            .await
            .map_err(|e| self.fail("update", e))?;
        match updated {
            Some(record) => self.to_entity("update", record),
            None => Err(self.fail(
                "update",
                AppError::database(format!("{} {id} vanished before update", E::RESOURCE)),
            )),
        }
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        let table = self.config.table;
        let removed = if self.config.soft_delete {
            let mut marker = Record::new();
            marker.insert(DELETED_AT.to_string(), timestamp_now());
            self.store
                .update(table, id, marker)
                .await
                .map_err(|e| self.fail("delete", e))?
                .is_some()
        } else {
            self.store
                .delete(table, id)
                .await
                .map_err(|e| self.fail("delete", e))?
        };
        if !removed {
            warn!(repository = %self.name, id, "Delete matched no row");
        }
        Ok(())
    }

    async fn count(&self, filters: &F) -> AppResult<u64> {
        let predicate = self.visible((self.build_predicate)(filters));
        self.store
            .count(self.config.table, &predicate)
            .await
            .map_err(|e| self.fail("count", e))
    }
}
