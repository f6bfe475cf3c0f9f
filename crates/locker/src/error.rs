#[derive(Debug, thiserror::Error)]
pub enum LockerError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored assessments are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
