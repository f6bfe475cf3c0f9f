//! Generation request shapes: the caller-facing union and its wire form.
//!
//! Callers describe *what* they want generated ([`GenerationRequest`]);
//! lowering to the JSON actually POSTed to the completion boundary
//! ([`WireRequest`]) runs all pre-flight checks, so every domain failure
//! (unsupported category, empty field, empty conversation) surfaces before
//! a single network byte moves.

use serde::{Deserialize, Serialize};

use wajibika_core::{build_prompt, normalize_history, ChatTurn, CoreError, ProjectDescription};

/// What the caller wants generated.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    /// Generate a full impact-assessment report for a project.
    Assessment { description: ProjectDescription },
    /// Generate the next reply for a community chat conversation.
    Chat { history: Vec<ChatTurn> },
}

/// JSON body POSTed to the completion boundary.
///
/// Exactly two kinds exist; anything else is rejected at the boundary with
/// a typed error rather than passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum WireRequest {
    Assessment(AssessmentPayload),
    Chat(ChatPayload),
}

impl WireRequest {
    /// The `kind` tag as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            WireRequest::Assessment(_) => "assessment",
            WireRequest::Chat(_) => "chat",
        }
    }
}

/// Payload for an assessment generation: the fully built prompt, opaque to
/// the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentPayload {
    pub prompt: String,
}

/// Payload for a chat generation: the normalized turn sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub turns: Vec<ChatTurn>,
}

impl GenerationRequest {
    /// Validate and lower to the wire shape.
    ///
    /// - `Assessment`: validates field presence, resolves the category and
    ///   builds the prompt ([`CoreError::UnsupportedCategory`] /
    ///   [`CoreError::Validation`]).
    /// - `Chat`: normalizes the history, dropping leading assistant turns
    ///   ([`CoreError::EmptyConversation`] when nothing remains).
    pub fn to_wire(&self) -> Result<WireRequest, CoreError> {
        match self {
            GenerationRequest::Assessment { description } => {
                description.validate()?;
                let prompt = build_prompt(description)?;
                Ok(WireRequest::Assessment(AssessmentPayload { prompt }))
            }
            GenerationRequest::Chat { history } => {
                let turns = normalize_history(history)?;
                Ok(WireRequest::Chat(ChatPayload { turns }))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
