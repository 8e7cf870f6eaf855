//! Basic authentication middleware for the statistics endpoint.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Basic credentials from the
/// `Authorization` header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` (with a `WWW-Authenticate: Basic` challenge,
/// added by [`AppError`]'s response mapping) if the header is missing,
/// malformed, or the credentials do not match the configured admin account.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    st.auth_service
        .authenticate(&username, password.as_deref().unwrap_or_default())?;

    Ok(next.run(req).await)
}
