//! HTTP server initialization and runtime setup.
//!
//! Wires up the fact provider, alias allocator, cache and services, then runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::{AuthService, FactService};
use crate::config::Config;
use crate::infrastructure::cache::InMemoryFactCache;
use crate::infrastructure::shortener::Base26UrlShortener;
use crate::infrastructure::upstream::{RetryPolicy, UselessFactsClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The upstream HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let retry = RetryPolicy {
        max_attempts: config.retry_max_attempts,
        base_delay: Duration::from_millis(config.retry_base_delay_ms),
        multiplier: config.retry_multiplier,
    };

    let provider = Arc::new(UselessFactsClient::new(
        config.facts_api_url.clone(),
        Duration::from_secs(config.upstream_timeout_seconds),
        retry,
    )?);
    let shortener = Arc::new(Base26UrlShortener::new());
    let cache = Arc::new(InMemoryFactCache::new());

    let fact_service = Arc::new(FactService::new(provider, shortener, cache));
    let auth_service = Arc::new(AuthService::new(
        config.admin_username.clone(),
        &config.admin_password,
    ));

    let state = AppState::new(fact_service, auth_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
