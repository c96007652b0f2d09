//! Injection points for resource-specific business rules.

use std::fmt;
use std::sync::Arc;

use realty_core::result::AppResult;

/// Rewrites list filters before they reach the repository.
pub type FilterHook<F> = Arc<dyn Fn(F) -> F + Send + Sync>;

/// Transforms or rejects a create input.
pub type CreateHook<C> = Arc<dyn Fn(C) -> AppResult<C> + Send + Sync>;

/// Transforms or rejects an update input, given the current entity.
pub type UpdateHook<E, U> = Arc<dyn Fn(U, &E) -> AppResult<U> + Send + Sync>;

/// Optional hooks of a [`CrudService`](crate::CrudService).
///
/// Every hook defaults to identity. Hooks run after the existence check on
/// mutation paths and cannot bypass it.
pub struct ServiceHooks<E, C, U, F> {
    /// Applied to filters on `find_all`.
    pub process_filters: Option<FilterHook<F>>,
    /// Applied to the input on `create`.
    pub process_create_input: Option<CreateHook<C>>,
    /// Applied to the input on `update`.
    pub process_update_input: Option<UpdateHook<E, U>>,
}

impl<E, C, U, F> ServiceHooks<E, C, U, F> {
    /// Identity hooks.
    pub fn new() -> Self {
        Self {
            process_filters: None,
            process_create_input: None,
            process_update_input: None,
        }
    }

    /// Set the filter hook.
    pub fn with_filters(mut self, hook: impl Fn(F) -> F + Send + Sync + 'static) -> Self {
        self.process_filters = Some(Arc::new(hook));
        self
    }

    /// Set the create-input hook.
    pub fn with_create_input(
        mut self,
        hook: impl Fn(C) -> AppResult<C> + Send + Sync + 'static,
    ) -> Self {
        self.process_create_input = Some(Arc::new(hook));
        self
    }

    /// Set the update-input hook.
    pub fn with_update_input(
        mut self,
        hook: impl Fn(U, &E) -> AppResult<U> + Send + Sync + 'static,
    ) -> Self {
        self.process_update_input = Some(Arc::new(hook));
        self
    }

    pub(crate) fn filters(&self, filters: F) -> F {
        match &self.process_filters {
            Some(hook) => hook(filters),
            None => filters,
        }
    }

    pub(crate) fn create_input(&self, input: C) -> AppResult<C> {
        match &self.process_create_input {
            Some(hook) => hook(input),
            None => Ok(input),
        }
    }

    pub(crate) fn update_input(&self, input: U, existing: &E) -> AppResult<U> {
        match &self.process_update_input {
            Some(hook) => hook(input, existing),
            None => Ok(input),
        }
    }
}

impl<E, C, U, F> Default for ServiceHooks<E, C, U, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C, U, F> Clone for ServiceHooks<E, C, U, F> {
    fn clone(&self) -> Self {
        Self {
            process_filters: self.process_filters.clone(),
            process_create_input: self.process_create_input.clone(),
            process_update_input: self.process_update_input.clone(),
        }
    }
}

impl<E, C, U, F> fmt::Debug for ServiceHooks<E, C, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHooks")
            .field("process_filters", &self.process_filters.is_some())
            .field("process_create_input", &self.process_create_input.is_some())
            .field("process_update_input", &self.process_update_input.is_some())
            .finish()
    }
}
