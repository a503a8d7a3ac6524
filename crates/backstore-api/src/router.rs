//! Route definitions for the Backstore HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(demo_routes())
        .nest("/api", health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Greeting, counter, blob, and item endpoints
fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::greeting::greet))
        .route("/status", get(handlers::status::status))
        .route("/inc", post(handlers::counter::increment))
        .route(
            "/blob-store",
            get(handlers::blob::fetch).post(handlers::blob::store),
        )
        .route("/items", get(handlers::items::list))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
