//! # realty-api
//!
//! HTTP API layer for Realty built on Axum.
//!
//! The generic [`CrudController`] works on a framework-independent
//! [`RequestContext`] and returns a [`ControllerResponse`]; thin axum
//! handlers adapt requests to it. Also provides the middleware stack
//! (request id, logging, CORS, compression), the router and the server
//! bootstrap.

pub mod app;
pub mod context;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod resources;
pub mod response;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use context::RequestContext;
pub use controller::CrudController;
pub use endpoint::CrudEndpoint;
pub use response::ControllerResponse;
pub use state::AppState;
