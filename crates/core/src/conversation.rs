//! Chat conversation model and history normalization.
//!
//! The completion boundary rejects histories that open with an assistant
//! turn (the UI seeds every chat with a fixed greeting), so
//! [`normalize_history`] drops leading assistant turns before a request is
//! built. Role names here are domain names; mapping to provider wire names
//! happens at the provider boundary, not in this crate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Originator of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person asking questions.
    Requester,
    /// The generated reply.
    Assistant,
}

/// One message in a conversation, tagged with its originator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    /// Convenience constructor for a requester turn.
    pub fn requester(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Requester,
            text: text.into(),
        }
    }

    /// Convenience constructor for an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Normalize a chat history for submission to the completion boundary.
///
/// Drops every leading [`ChatRole::Assistant`] turn so the submitted
/// sequence starts with a requester turn. Fails with
/// [`CoreError::EmptyConversation`] when the input is empty or nothing
/// remains after dropping, so the caller can block the request before any
/// network traffic.
pub fn normalize_history(turns: &[ChatTurn]) -> Result<Vec<ChatTurn>, CoreError> {
    let first_requester = turns
        .iter()
        .position(|turn| turn.role == ChatRole::Requester);

    match first_requester {
        Some(start) => Ok(turns[start..].to_vec()),
        None => Err(CoreError::EmptyConversation),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
