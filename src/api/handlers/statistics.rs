//! Handler for access statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::AccessStatItem;
use crate::state::AppState;

/// Lists access counts for every cached alias.
///
/// # Endpoint
///
/// `GET /admin/statistics`
///
/// Requires Basic authentication (see
/// [`crate::api::middleware::auth`]). Counts are a point-in-time snapshot;
/// entries being accessed concurrently may already be ahead of the reported
/// values by the time the response arrives.
pub async fn statistics_handler(State(state): State<AppState>) -> Json<Vec<AccessStatItem>> {
    let stats = state
        .fact_service
        .statistics()
        .into_iter()
        .map(AccessStatItem::from)
        .collect();

    Json(stats)
}
