//! REST client for the Gemini streaming generation endpoint.
//!
//! Wraps `models/{model}:streamGenerateContent?alt=sse` using [`reqwest`]:
//! one POST per generation, response consumed as a server-sent-event stream
//! whose `data:` payloads carry candidate text fragments.

use serde::{Deserialize, Serialize};

use wajibika_client::WireRequest;
use wajibika_core::{ChatRole, ChatTurn};

use crate::config::ServerConfig;

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error.message` from the body if present, else the raw body text.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Request body for `streamGenerateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: Some("user"),
            parts: vec![Part { text }],
        }
    }

    fn from_turn(turn: &ChatTurn) -> Self {
        let role = match turn.role {
            ChatRole::Requester => "user",
            ChatRole::Assistant => "model",
        };
        Self {
            role: Some(role),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }

    /// System instructions carry no role on the wire.
    fn instruction(text: String) -> Self {
        Self {
            role: None,
            parts: vec![Part { text }],
        }
    }
}

/// One streamed response chunk, as carried in a `data:` event payload.
#[derive(Debug, Deserialize)]
struct GenerateContentChunk {
    #[serde(default)]
    candidates: Vec<ChunkCandidate>,
}

#[derive(Debug, Deserialize)]
struct ChunkCandidate {
    content: Option<ChunkContent>,
}

#[derive(Debug, Deserialize)]
struct ChunkContent {
    #[serde(default)]
    parts: Vec<ChunkPart>,
}

#[derive(Debug, Deserialize)]
struct ChunkPart {
    text: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider client
// ---------------------------------------------------------------------------

/// HTTP client for the configured Gemini model.
pub struct GeminiProvider {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    chat_system_instruction: String,
}

impl GeminiProvider {
    /// Create a new provider client from server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a provider client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(http: reqwest::Client, config: &ServerConfig) -> Self {
        Self {
            http,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
            chat_system_instruction: config.chat_system_instruction.clone(),
        }
    }

    /// Open a streaming generation for `request`.
    ///
    /// Sends the POST and verifies the response status, so every
    /// before-first-byte failure surfaces here as a typed error. Returns
    /// the response ready for incremental consumption; feed its byte
    /// chunks through an [`SseTextParser`] to recover text fragments.
    pub async fn begin_stream(
        &self,
        request: &WireRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .http
            .post(self.endpoint_url())
            .json(&self.request_body(request))
            .send()
            .await?;

        Self::ensure_success(response).await
    }

    // ---- private helpers ----

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Lower the boundary request to the Gemini wire shape.
    ///
    /// Assessment prompts arrive fully built and pass through as a single
    /// user content; chat turns map onto Gemini roles (requester becomes
    /// `user`, assistant becomes `model`) with the configured system
    /// instruction attached.
    fn request_body(&self, request: &WireRequest) -> GenerateContentRequest {
        match request {
            WireRequest::Assessment(payload) => GenerateContentRequest {
                contents: vec![Content::user(payload.prompt.clone())],
                system_instruction: None,
            },
            WireRequest::Chat(payload) => GenerateContentRequest {
                contents: payload.turns.iter().map(Content::from_turn).collect(),
                system_instruction: Some(Content::instruction(
                    self.chat_system_instruction.clone(),
                )),
            },
        }
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`ProviderError::Api`] carrying the
    /// status and the most useful message the body offers.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// SSE parsing
// ---------------------------------------------------------------------------

/// Incremental parser for the `alt=sse` response stream.
///
/// Buffers raw bytes until a full line is available, then pulls the text
/// parts out of each `data:` event payload. Lines are newline-framed, so
/// splitting on `\n` stays correct even when a network chunk cuts a
/// multi-byte character (UTF-8 continuation bytes never equal `\n`).
#[derive(Debug, Default)]
pub struct SseTextParser {
    pending: Vec<u8>,
}

impl SseTextParser {
    /// Feed raw response bytes, returning every text fragment the bytes
    /// complete, in order. Non-`data:` lines and unparseable payloads are
    /// skipped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut fragments = Vec::new();
        while let Some(newline) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\r', '\n']);
            if let Some(payload) = line.strip_prefix("data: ") {
                if let Some(text) = extract_text(payload) {
                    fragments.push(text);
                }
            }
        }
        fragments
    }
}

/// Pull the first candidate's concatenated part text out of one event
/// payload. Returns `None` for empty or unparseable chunks (e.g. a final
/// event carrying only a finish reason).
fn extract_text(payload: &str) -> Option<String> {
    let chunk: GenerateContentChunk = match serde_json::from_str(payload) {
        Ok(chunk) => chunk,
        Err(err) => {
            tracing::debug!(error = %err, "Skipping unparseable stream event");
            return None;
        }
    };
    let content = chunk.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    (!text.is_empty()).then_some(text)
}
