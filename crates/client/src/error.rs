use wajibika_core::CoreError;

/// Errors from a single generation attempt.
///
/// The variants preserve the distinction callers need most: whether any
/// content was received before the failure. [`Request`](Self::Request) and
/// [`Upstream`](Self::Upstream) mean nothing was streamed;
/// [`StreamInterrupted`](Self::StreamInterrupted) carries the partial text
/// already delivered through the chunk callback.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Pre-flight domain failure: unsupported category, empty field, or a
    /// conversation that normalized to zero turns. No request was sent.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The request failed before any body byte arrived (connect, DNS, TLS,
    /// or writing the request itself).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion boundary answered with a non-success status.
    #[error("Completion service error ({status}): {message}")]
    Upstream {
        /// HTTP status code returned by the boundary.
        status: u16,
        /// Parsed `{"error": …}` message, or the raw body text.
        message: String,
    },

    /// Transport failed after streaming began. Fragments already handed to
    /// the chunk callback remain valid and are collected in `partial`.
    #[error("Stream interrupted: {source}")]
    StreamInterrupted {
        /// Everything delivered before the failure, in order.
        partial: String,
        #[source]
        source: reqwest::Error,
    },

    /// A generation is already running on this client surface.
    #[error("A generation is already in progress")]
    AlreadyInProgress,
}
