//! Type-erased controller interface used by the router.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::response::ControllerResponse;

/// The five CRUD operations of one resource.
///
/// Object safe, so the router can hold every resource's controller as
/// `Arc<dyn CrudEndpoint>` regardless of its entity types. Operations never
/// fail: errors are already rendered into the returned envelope.
#[async_trait]
pub trait CrudEndpoint: Send + Sync + 'static {
    /// Controller name used in logs, e.g. `"PropertyController"`.
    fn name(&self) -> &str;

    /// `GET /` with pagination and filter query parameters.
    async fn list(&self, ctx: &RequestContext) -> ControllerResponse;

    /// `GET /{id}`
    async fn get(&self, ctx: &RequestContext) -> ControllerResponse;

    /// `POST /`
    async fn create(&self, ctx: &RequestContext) -> ControllerResponse;

    /// `PUT /{id}` and `PATCH /{id}`
    async fn update(&self, ctx: &RequestContext) -> ControllerResponse;

    /// `DELETE /{id}`
    async fn delete(&self, ctx: &RequestContext) -> ControllerResponse;
}
