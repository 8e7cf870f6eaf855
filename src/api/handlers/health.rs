//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The state is all in-process, so the only component worth reporting is the
/// fact cache; the response always carries 200 with the current entry count.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let entries = state.fact_service.statistics().len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("Entries: {entries}")),
            },
        },
    })
}
