//! Tests for `ApiError` → HTTP response mapping.
//!
//! These tests verify that each `ApiError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `ApiError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use wajibika_api::error::ApiError;
use wajibika_api::provider::ProviderError;
use wajibika_core::CoreError;

/// Helper: convert an `ApiError` into its status code and parsed JSON body.
async fn error_to_response(err: ApiError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::UnsupportedCategory maps to 400 with UNSUPPORTED_CATEGORY
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_category_returns_400() {
    let err = ApiError::Core(CoreError::UnsupportedCategory("Astrological".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNSUPPORTED_CATEGORY");
    assert_eq!(json["error"], "Unsupported assessment category: Astrological");
}

// ---------------------------------------------------------------------------
// Test: CoreError::EmptyConversation maps to 400 with EMPTY_CONVERSATION
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_conversation_returns_400() {
    let err = ApiError::Core(CoreError::EmptyConversation);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EMPTY_CONVERSATION");
    assert_eq!(
        json["error"],
        "Conversation resolved to zero turns after normalization"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::EmptyGeneration maps to 502 with EMPTY_GENERATION
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_generation_returns_502() {
    let err = ApiError::Core(CoreError::EmptyGeneration);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "EMPTY_GENERATION");
    assert_eq!(
        json["error"],
        "Generation completed without producing any text"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = ApiError::Core(CoreError::Validation("projectName is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "projectName is required");
}

// ---------------------------------------------------------------------------
// Test: ApiError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = ApiError::BadRequest("unsupported payload shape".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "unsupported payload shape");
}

// ---------------------------------------------------------------------------
// Test: ProviderError::Api maps to 502 and carries the upstream message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_api_error_returns_502_with_message() {
    // The proxy reports 502 even when the upstream status was 429.
    let err = ApiError::Provider(ProviderError::Api {
        status: 429,
        message: "Quota exceeded for quota metric".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Quota exceeded for quota metric");
}

// ---------------------------------------------------------------------------
// Test: ProviderError::Request maps to 502 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_error_returns_502_and_sanitizes_message() {
    // Produce a real connection error from a port that is not listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = reqwest::get(format!("http://{addr}/")).await.unwrap_err();

    let (status, json) = error_to_response(ApiError::Provider(ProviderError::Request(err))).await;

    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");

    // The response body must NOT contain connection details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains(&addr.to_string()),
        "Upstream error response must not leak the upstream address"
    );
    assert_eq!(
        json["error"],
        "An error occurred while communicating with the AI."
    );
}
