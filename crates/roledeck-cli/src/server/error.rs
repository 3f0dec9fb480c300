//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use roledeck::RoledeckError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Internal server error.
    Internal(String),
    /// Error from the roledeck library.
    Roledeck(RoledeckError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            ApiError::Roledeck(e @ (RoledeckError::Fetch(_) | RoledeckError::Store(_))) => {
                (StatusCode::BAD_GATEWAY, "store_error", e.to_string())
            }
            ApiError::Roledeck(e) => (StatusCode::INTERNAL_SERVER_ERROR, "roledeck_error", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<RoledeckError> for ApiError {
    fn from(err: RoledeckError) -> Self {
        ApiError::Roledeck(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Roledeck(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}
