use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wajibika_core::CoreError;

use crate::provider::ProviderError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ProviderError`] for upstream
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `wajibika_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure talking to the completion provider.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            ApiError::Core(core) => match core {
                CoreError::UnsupportedCategory(_) => (
                    StatusCode::BAD_REQUEST,
                    "UNSUPPORTED_CATEGORY",
                    core.to_string(),
                ),
                CoreError::EmptyConversation => (
                    StatusCode::BAD_REQUEST,
                    "EMPTY_CONVERSATION",
                    core.to_string(),
                ),
                CoreError::EmptyGeneration => (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_GENERATION",
                    core.to_string(),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Upstream provider failures ---
            ApiError::Provider(provider) => match provider {
                ProviderError::Api { message, .. } => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", message.clone())
                }
                ProviderError::Request(err) => {
                    tracing::error!(error = %err, "Provider request failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "An error occurred while communicating with the AI.".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
