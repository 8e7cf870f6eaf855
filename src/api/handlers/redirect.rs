//! Handler for alias redirection.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to the original fact URL.
///
/// # Endpoint
///
/// `GET /facts/{alias}`
///
/// Increments the alias's access counter, then answers with a
/// 308 Permanent Redirect pointing at the stored original URL.
///
/// # Errors
///
/// Returns 400 Bad Request for a blank alias and 404 Not Found for an alias
/// with no cached fact.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.fact_service.redirect(&alias)?;
    Ok(Redirect::permanent(&original_url))
}
