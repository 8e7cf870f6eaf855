//! Application error taxonomy and HTTP response mapping.
//!
//! Every core operation fails with a typed [`AppError`] variant so the HTTP
//! layer can translate it into a precise status code. Upstream failures keep
//! their classification (and status code) all the way to the response; nothing
//! is downgraded to a generic error inside the core.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error with enough context for diagnosis.
///
/// # HTTP mapping
///
/// | Variant            | Status                      |
/// |--------------------|-----------------------------|
/// | `Validation`       | 400                         |
/// | `Unauthorized`     | 401 (+ `WWW-Authenticate`)  |
/// | `NotFound`         | 404                         |
/// | `RateLimited`      | 429                         |
/// | `UpstreamClient`   | the upstream's 4xx status   |
/// | `UpstreamServer`   | the upstream's 5xx status   |
/// | `Transport`        | 500                         |
/// | `Internal`         | 500                         |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    RateLimited { message: String, details: Value },
    #[error("{message} (status {status})")]
    UpstreamClient { status: u16, message: String, details: Value },
    #[error("{message} (status {status})")]
    UpstreamServer { status: u16, message: String, details: Value },
    #[error("{message}")]
    Transport { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn rate_limited(message: impl Into<String>, details: Value) -> Self {
        Self::RateLimited {
            message: message.into(),
            details,
        }
    }

    pub fn upstream_client(status: u16, message: impl Into<String>, details: Value) -> Self {
        Self::UpstreamClient {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn upstream_server(status: u16, message: impl Into<String>, details: Value) -> Self {
        Self::UpstreamServer {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn transport(message: impl Into<String>, details: Value) -> Self {
        Self::Transport {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::RateLimited { message, details } => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                message,
                details,
            ),
            AppError::UpstreamClient {
                status,
                message,
                details,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "upstream_client_error",
                message,
                details,
            ),
            AppError::UpstreamServer {
                status,
                message,
                details,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "upstream_server_error",
                message,
                details,
            ),
            AppError::Transport { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "transport_error",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        let mut response = (status, Json(body)).into_response();

        // RFC 7617: challenge the client on missing/invalid Basic credentials.
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"statistics\""),
            );
        }

        response
    }
}
