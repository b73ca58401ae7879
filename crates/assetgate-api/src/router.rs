//! Route definitions for the AssetGate HTTP API.
//!
//! All routes are mounted under `/api`. Protected groups carry their own
//! [`RouteGuard`] so each declares its role requirement in one place.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware as axum_middleware, routing::get};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use assetgate_auth::{Role, RoleRequirement};

use crate::handlers;
use crate::middleware;
use crate::middleware::auth::RouteGuard;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(identity_routes(&state))
        .merge(admin_routes(&state));

    Router::new()
        .nest("/api", api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Unauthenticated health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Any authenticated caller
fn identity_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::identity::me))
        .route_layer(axum_middleware::from_fn_with_state(
            RouteGuard::new(state, RoleRequirement::none()),
            middleware::auth::authenticate,
        ))
}

/// Admin only
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/overview", get(handlers::admin::overview))
        .route_layer(axum_middleware::from_fn_with_state(
            RouteGuard::new(state, RoleRequirement::only(Role::Admin)),
            middleware::auth::authenticate,
        ))
}
