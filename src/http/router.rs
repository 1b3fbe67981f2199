//! Route table for the Boruto API
//!
//! Shared by the server binary and the integration tests so both
//! exercise the same layers.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};

use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// Value of the default `Server` response header
pub const SERVER_HEADER: &str = concat!("boruto/", env!("CARGO_PKG_VERSION"));

/// Build the API router over shared services
///
/// Unmatched paths fall through to Axum's default empty 404.
pub fn build_router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/heroes", get(handlers::list_heroes_handler))
        .route("/heroes/search", get(handlers::search_heroes_handler))
        // Add middleware
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::SERVER,
            HeaderValue::from_static(SERVER_HEADER),
        ))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services)
}
