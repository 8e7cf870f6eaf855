//! Handler for fetching and shortening a fact.

use axum::{Json, extract::State};

use crate::api::dto::fact::FactResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a random fact and returns it with its alias.
///
/// # Endpoint
///
/// `POST /facts`
///
/// # Request Flow
///
/// 1. Fetch a fact from the upstream provider (retried with backoff)
/// 2. Allocate (or reuse) the alias for the fact's permalink
/// 3. Cache the fact under the alias if not already present
///
/// The call blocks for the duration of upstream retries, up to ~30 s in the
/// worst case with the default policy.
///
/// # Errors
///
/// Upstream failures surface with their classification: 429 when the
/// provider rate-limits, the provider's own status for other 4xx/5xx
/// responses, 500 for transport failures.
pub async fn create_fact_handler(
    State(state): State<AppState>,
) -> Result<Json<FactResponse>, AppError> {
    let fact = state.fact_service.create_fact().await?;
    Ok(Json(fact.into()))
}
