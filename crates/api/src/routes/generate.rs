//! Streaming generation endpoint.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header;
use axum::response::Response;
use axum::Json;
use futures::stream::{self, StreamExt};

use wajibika_client::WireRequest;
use wajibika_core::CoreError;

use crate::error::ApiResult;
use crate::provider::SseTextParser;
use crate::state::AppState;

/// POST /api/generate -- stream one generation.
///
/// Validates the request, opens a streaming call against the configured
/// provider, and re-streams its text fragments as an incrementally flushed
/// `text/plain` body with no inter-fragment framing.
///
/// Failures before the first byte (bad payload, upstream rejection) arrive
/// as `{error, code}` JSON with a non-success status. Once streaming has
/// begun, an upstream abort terminates the response body mid-stream and
/// the client sees a transport error.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<WireRequest>,
) -> ApiResult<Response> {
    validate(&request)?;
    tracing::info!(kind = request.kind(), "Generation requested");

    let upstream = state.provider.begin_stream(&request).await?;

    // Pull text fragments out of the provider's SSE events as chunks
    // arrive, forwarding each one as its own body frame.
    let fragments = upstream
        .bytes_stream()
        .scan(SseTextParser::default(), |parser, item| {
            let out: Vec<Result<Bytes, std::io::Error>> = match item {
                Ok(bytes) => parser
                    .push(&bytes)
                    .into_iter()
                    .map(|fragment| Ok(Bytes::from(fragment)))
                    .collect(),
                Err(err) => {
                    tracing::warn!(error = %err, "Upstream stream failed mid-generation");
                    vec![Err(std::io::Error::other(err))]
                }
            };
            std::future::ready(Some(stream::iter(out)))
        })
        .flatten();

    Ok(Response::builder()
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from_stream(fragments))
        .unwrap())
}

/// Reject payloads that could never produce a generation.
///
/// The client normalizes before sending; this re-check keeps the boundary
/// safe when called directly.
fn validate(request: &WireRequest) -> Result<(), CoreError> {
    match request {
        WireRequest::Assessment(payload) if payload.prompt.trim().is_empty() => {
            Err(CoreError::Validation("prompt must not be empty".into()))
        }
        WireRequest::Chat(payload) if payload.turns.is_empty() => Err(CoreError::EmptyConversation),
        _ => Ok(()),
    }
}
