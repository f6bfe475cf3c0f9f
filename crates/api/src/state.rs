use std::sync::Arc;

use crate::config::ServerConfig;
use crate::provider::GeminiProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the configured Gemini model.
    pub provider: Arc<GeminiProvider>,
}
