//! Generic CRUD controller.
//!
//! One [`CrudController`] serves every resource. It parses the request
//! context, validates input through [`Schema`]s, calls the resource's
//! [`ResourceService`] and renders the envelope. Every failure goes through
//! [`map_error`], so the controller is the only place that decides what a
//! client sees.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;
use validator::Validate;

use realty_core::error::AppError;
use realty_core::result::AppResult;
use realty_core::traits::{Entity, ResourceService};
use realty_core::types::{PaginationParams, ResponseMeta};
use realty_core::validation::{JsonSchema, Schema};

use crate::context::RequestContext;
use crate::endpoint::CrudEndpoint;
use crate::error::map_error;
use crate::extractors::parse_id;
use crate::response::ControllerResponse;

const PAGE: &str = "page";
const LIMIT: &str = "limit";
const ID: &str = "id";

/// Controller for one resource, generic over entity `E`, create input `C`,
/// update input `U` and filters `F`.
pub struct CrudController<E, C, U, F> {
    name: String,
    service: Arc<dyn ResourceService<E, C, U, F>>,
    create_schema: Arc<dyn Schema<C>>,
    update_schema: Arc<dyn Schema<U>>,
    filter_schema: Arc<dyn Schema<F>>,
}

impl<E, C, U, F> CrudController<E, C, U, F>
where
    E: Entity,
    C: DeserializeOwned + Validate + Send + 'static,
    U: DeserializeOwned + Validate + Send + 'static,
    F: DeserializeOwned + Validate + Default + Send + Sync + 'static,
{
    /// Controller validating input with the types' own `serde` and
    /// `validator` rules.
    pub fn new(service: Arc<dyn ResourceService<E, C, U, F>>) -> Self {
        Self::with_schemas(
            service,
            Arc::new(JsonSchema::<C>::new()),
            Arc::new(JsonSchema::<U>::new()),
            Arc::new(JsonSchema::<F>::new()),
        )
    }
}

impl<E, C, U, F> CrudController<E, C, U, F>
where
    E: Entity,
    C: Send + 'static,
    U: Send + 'static,
    F: Default + Send + Sync + 'static,
{
    /// Controller with explicit schemas.
    pub fn with_schemas(
        service: Arc<dyn ResourceService<E, C, U, F>>,
        create_schema: Arc<dyn Schema<C>>,
        update_schema: Arc<dyn Schema<U>>,
        filter_schema: Arc<dyn Schema<F>>,
    ) -> Self {
        Self {
            name: format!("{}Controller", E::RESOURCE),
            service,
            create_schema,
            update_schema,
            filter_schema,
        }
    }

    /// Filters from every query parameter except `page` and `limit`.
    ///
    /// Filters that fail their schema are dropped as a whole.
    fn parse_filters(&self, ctx: &RequestContext) -> F {
        let raw: Map<String, Value> = ctx
            .query_params()
            .iter()
            .filter(|(key, _)| key.as_str() != PAGE && key.as_str() != LIMIT)
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();

        match self.filter_schema.validate(&Value::Object(raw)) {
            Ok(filters) => filters,
            Err(err) => {
                debug!(
                    controller = %self.name,
                    field = %err.path,
                    reason = %err.message,
                    "Ignoring invalid filters"
                );
                F::default()
            }
        }
    }

    async fn try_list(&self, ctx: &RequestContext) -> AppResult<ControllerResponse> {
        let pagination = PaginationParams::from_query(ctx.query(PAGE), ctx.query(LIMIT));
        let filters = self.parse_filters(ctx);
        let page = self.service.find_all(filters, pagination).await?;

        let meta = ResponseMeta {
            pagination: Some(page.pagination),
            request_id: ctx.request_id().map(str::to_owned),
        };
        ControllerResponse::success(StatusCode::OK, page.data, meta)
    }

    async fn try_get(&self, ctx: &RequestContext) -> AppResult<ControllerResponse> {
        let id = parse_id(ctx.param(ID))?;
        let entity = self
            .service
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found(E::RESOURCE, id))?;
        ControllerResponse::success(StatusCode::OK, entity, meta(ctx))
    }

    async fn try_create(&self, ctx: &RequestContext) -> AppResult<ControllerResponse> {
        let body = ctx.json_body()?;
        let input = self.create_schema.validate(&body)?;
        let created = self.service.create(input).await?;
        ControllerResponse::success(StatusCode::CREATED, created, meta(ctx))
    }

    async fn try_update(&self, ctx: &RequestContext) -> AppResult<ControllerResponse> {
        let id = parse_id(ctx.param(ID))?;
        let body = ctx.json_body()?;
        let input = self.update_schema.validate(&body)?;
        let updated = self.service.update(id, input).await?;
        ControllerResponse::success(StatusCode::OK, updated, meta(ctx))
    }

    async fn try_delete(&self, ctx: &RequestContext) -> AppResult<ControllerResponse> {
        let id = parse_id(ctx.param(ID))?;
        self.service.delete(id).await?;
        ControllerResponse::success(
            StatusCode::OK,
            json!({ "id": id, "deleted": true }),
            meta(ctx),
        )
    }

    fn fail(&self, err: AppError, ctx: &RequestContext, action: &str) -> ControllerResponse {
        let fallback = format!("Failed to {action} {}", E::RESOURCE);
        map_error(&self.name, err, ctx.request_id(), &fallback)
    }
}

fn meta(ctx: &RequestContext) -> ResponseMeta {
    ResponseMeta {
        pagination: None,
        request_id: ctx.request_id().map(str::to_owned),
    }
}

#[async_trait]
impl<E, C, U, F> CrudEndpoint for CrudController<E, C, U, F>
where
    E: Entity,
    C: Send + 'static,
    U: Send + 'static,
    F: Default + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, ctx: &RequestContext) -> ControllerResponse {
        self.try_list(ctx)
            .await
            .unwrap_or_else(|err| self.fail(err, ctx, "list"))
    }

    async fn get(&self, ctx: &RequestContext) -> ControllerResponse {
        self.try_get(ctx)
            .await
            .unwrap_or_else(|err| self.fail(err, ctx, "fetch"))
    }

    async fn create(&self, ctx: &RequestContext) -> ControllerResponse {
        self.try_create(ctx)
            .await
            .unwrap_or_else(|err| self.fail(err, ctx, "create"))
    }

    async fn update(&self, ctx: &RequestContext) -> ControllerResponse {
        self.try_update(ctx)
            .await
            .unwrap_or_else(|err| self.fail(err, ctx, "update"))
    }

    async fn delete(&self, ctx: &RequestContext) -> ControllerResponse {
        self.try_delete(ctx)
            .await
            .unwrap_or_else(|err| self.fail(err, ctx, "delete"))
    }
}

impl<E, C, U, F> fmt::Debug for CrudController<E, C, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudController")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
