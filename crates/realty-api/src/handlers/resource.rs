//! Axum adapters for the generic CRUD controllers.
//!
//! Each handler turns the axum extractors into a [`RequestContext`] and
//! hands it to the resource's [`CrudEndpoint`]. The router installs one
//! endpoint per resource as the handler state.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use http::HeaderMap;

use crate::context::RequestContext;
use crate::endpoint::CrudEndpoint;
use crate::middleware::request_id_of;
use crate::response::ControllerResponse;

/// State of a resource router.
pub type Endpoint = State<Arc<dyn CrudEndpoint>>;

/// GET /api/{resource}
pub async fn list(
    State(endpoint): Endpoint,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ControllerResponse {
    let ctx = context(&headers).with_query(query);
    endpoint.list(&ctx).await
}

/// POST /api/{resource}
pub async fn create(State(endpoint): Endpoint, headers: HeaderMap, body: Bytes) -> ControllerResponse {
    let ctx = context(&headers).with_body(body);
    endpoint.create(&ctx).await
}

/// GET /api/{resource}/{id}
pub async fn get(
    State(endpoint): Endpoint,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ControllerResponse {
    let ctx = context(&headers).with_param("id", id);
    endpoint.get(&ctx).await
}

/// PUT/PATCH /api/{resource}/{id}
pub async fn update(
    State(endpoint): Endpoint,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ControllerResponse {
    let ctx = context(&headers).with_param("id", id).with_body(body);
    endpoint.update(&ctx).await
}

/// DELETE /api/{resource}/{id}
pub async fn delete(
    State(endpoint): Endpoint,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ControllerResponse {
    let ctx = context(&headers).with_param("id", id);
    endpoint.delete(&ctx).await
}

fn context(headers: &HeaderMap) -> RequestContext {
    let mut ctx = RequestContext::new();
    if let Some(id) = request_id_of(headers) {
        ctx.set_request_id(id);
    }
    ctx
}
