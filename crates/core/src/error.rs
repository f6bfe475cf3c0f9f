#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unsupported assessment category: {0}")]
    UnsupportedCategory(String),

    #[error("Conversation resolved to zero turns after normalization")]
    EmptyConversation,

    #[error("Generation completed without producing any text")]
    EmptyGeneration,

    #[error("Validation failed: {0}")]
    Validation(String),
}
