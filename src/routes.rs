//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /facts`            - Fetch a fact and shorten its URL (public)
//! - `GET  /facts/{alias}`    - Permanent redirect to the original URL (public)
//! - `GET  /admin/statistics` - Access counts (Basic auth required)
//! - `GET  /health`           - Liveness and cache status (public)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Rate limiting** - per-IP token bucket, stricter on the admin route
//! - **Authentication** - Basic credentials on the statistics route
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{
    create_fact_handler, health_handler, redirect_handler, statistics_handler,
};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let admin_router = Router::new()
        .route("/admin/statistics", get(statistics_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let public_router = Router::new()
        .route("/facts", post(create_fact_handler))
        .route("/facts/{alias}", get(redirect_handler))
        .layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(public_router)
        .merge(admin_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
