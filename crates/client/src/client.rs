//! Streaming completion client.
//!
//! [`CompletionClient`] issues exactly one POST per generation call, reads
//! the response body as a byte stream, decodes it incrementally via
//! [`StreamDecoder`], and hands every decoded fragment to the caller's
//! callback in arrival order. One call maps to one request: no retries, no
//! parallel fetches, no internal multi-step composition.

use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;

use crate::decode::StreamDecoder;
use crate::error::GenerateError;
use crate::request::GenerationRequest;

/// Transient accumulator for one generation call.
///
/// Promoted to the returned text on clean close, or carried out inside
/// [`GenerateError::StreamInterrupted`] on mid-stream failure. Never shared
/// and never partially persisted.
#[derive(Debug, Default)]
struct StreamBuffer {
    text: String,
}

impl StreamBuffer {
    fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    fn into_text(self) -> String {
        self.text
    }
}

/// Releases the in-flight flag when a call leaves scope, on every exit path.
#[derive(Debug)]
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// HTTP client for the completion boundary.
///
/// One instance represents one logical generation surface: at most one call
/// may be in flight at a time, and a concurrent second call fails fast with
/// [`GenerateError::AlreadyInProgress`] without touching the network. Share
/// an instance across tasks (via `Arc`) to extend that guarantee across
/// them.
///
/// Dropping the future returned by
/// [`stream_completion`](Self::stream_completion) closes the underlying
/// response body, abandoning the generation; no dedicated cancel API exists.
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    in_flight: AtomicBool,
}

impl CompletionClient {
    /// Create a client for the given generation endpoint.
    ///
    /// * `endpoint` - Full URL of the boundary, e.g.
    ///   `http://host:8080/api/generate`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling or preconfigured timeouts).
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one generation and stream its output.
    ///
    /// `on_chunk` is invoked synchronously for every non-empty decoded
    /// fragment, in exact arrival order; the concatenation of all fragments
    /// equals the returned string. The call resolves only once the stream
    /// signals completion, whether or not the text ends with the report
    /// sentinel (completion detection is the caller's next step).
    ///
    /// Failure modes, in order of occurrence:
    ///
    /// - [`GenerateError::AlreadyInProgress`] while another call runs;
    /// - [`GenerateError::Domain`] for pre-flight validation failures (no
    ///   request is sent);
    /// - [`GenerateError::Request`] when the request fails before any body
    ///   byte arrives;
    /// - [`GenerateError::Upstream`] for a non-success status;
    /// - [`GenerateError::StreamInterrupted`] for a transport failure
    ///   mid-stream, carrying everything already delivered.
    pub async fn stream_completion(
        &self,
        request: GenerationRequest,
        mut on_chunk: impl FnMut(&str),
    ) -> Result<String, GenerateError> {
        let _guard = self.claim()?;

        let wire = request.to_wire()?;

        let response = self
            .http
            .post(&self.endpoint)
            .json(&wire)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = upstream_message(status.as_u16(), response).await;
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let mut buffer = StreamBuffer::default();
        let mut decoder = StreamDecoder::new();
        let mut stream = response.bytes_stream();

        while let Some(next) = stream.next().await {
            match next {
                Ok(bytes) => {
                    let fragment = decoder.decode(&bytes);
                    if !fragment.is_empty() {
                        on_chunk(&fragment);
                        buffer.append(&fragment);
                    }
                }
                Err(source) => {
                    return Err(GenerateError::StreamInterrupted {
                        partial: buffer.into_text(),
                        source,
                    });
                }
            }
        }

        // The stream ended mid-character: flush the truncated tail so the
        // callback and the returned text stay in lockstep.
        if let Some(tail) = decoder.finish() {
            on_chunk(&tail);
            buffer.append(&tail);
        }

        Ok(buffer.into_text())
    }

    /// Claim the single in-flight slot, failing fast when it is taken.
    fn claim(&self) -> Result<FlightGuard<'_>, GenerateError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(GenerateError::AlreadyInProgress);
        }
        Ok(FlightGuard {
            flag: &self.in_flight,
        })
    }
}

/// Extract a single human-readable message from a non-success response.
///
/// Prefers the `error` field of a JSON body, then the raw body text, then a
/// plain HTTP status description.
async fn upstream_message(status: u16, response: reqwest::Response) -> String {
    let fallback = format!("HTTP error {status}");
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return fallback,
    };
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = json.get("error").and_then(|value| value.as_str()) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        fallback
    } else {
        body
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
