//! Router construction.
//!
//! The routing table is built once here from the path constants in
//! [`crate::routes`] and is read-only afterwards. The security middleware
//! wraps every route and the fallback, so no request reaches a handler
//! without passing the policy first.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::routes;
use crate::security;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::HELLO, get(handlers::hello_handler))
        .route(routes::OPENAPI_JSON, get(handlers::openapi_handler))
        .fallback(handlers::not_found_handler)
        .layer(middleware::from_fn_with_state(state.clone(), security::authorize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
