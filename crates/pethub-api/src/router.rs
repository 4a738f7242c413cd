//! Route definitions for the PetHub HTTP API.
//!
//! Routes are mounted under `/api`. The monitored-users listing is also
//! served at `/monitored-users`, the path existing admin clients call.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(admin_routes()).merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .route(
            "/monitored-users",
            get(handlers::admin::monitored::list_monitored_users),
        )
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Admin endpoints
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/monitored-users",
        get(handlers::admin::monitored::list_monitored_users),
    )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
