use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

const NOT_AUTHENTICATED: &str = "Not authenticated. Please authenticate first.";

/// Failures a JSON route can end in. Each maps to one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request input.
    #[error("{0}")]
    Validation(String),

    /// No usable token is held.
    #[error("{0}")]
    AuthenticationRequired(String),

    /// An upstream call failed; `details` carries what the upstream said.
    #[error("{error}: {details}")]
    Upstream { error: &'static str, details: String },
}

impl ApiError {
    pub fn not_authenticated() -> Self {
        ApiError::AuthenticationRequired(NOT_AUTHENTICATED.to_string())
    }

    pub fn upstream(error: &'static str, source: impl std::fmt::Display) -> Self {
        ApiError::Upstream {
            error,
            details: source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::AuthenticationRequired(message) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Upstream { error, details } => {
                tracing::error!("{}: {}", error, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": error, "details": details })),
                )
                    .into_response()
            }
        }
    }
}
