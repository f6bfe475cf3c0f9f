/// System instruction attached to community chat generations unless
/// overridden via `WAJIBIKA_CHAT_SYSTEM_INSTRUCTION`.
pub const DEFAULT_CHAT_SYSTEM_INSTRUCTION: &str = "You are 'Mazingira Rafiki', a helpful, anonymous AI assistant for a Kenyan community forum. Your goal is to facilitate constructive discussions about environmental and social impacts of local projects. Be neutral, informative, and encouraging. Do not provide legal advice. Keep responses concise and clear. All conversations are in English.";

/// Server configuration loaded from environment variables.
///
/// All fields except the Gemini API key have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `WAJIBIKA_CORS_ORIGIN`.
    pub cors_origins: Vec<String>,
    /// Timeout for producing a response head, in seconds (default: `30`).
    /// Does not bound the streamed body, only the time until streaming starts.
    pub request_timeout_secs: u64,
    /// Gemini API key. Required; startup fails without it.
    pub gemini_api_key: String,
    /// Gemini API base URL (default: `https://generativelanguage.googleapis.com`).
    pub gemini_base_url: String,
    /// Gemini model identifier (default: `gemini-2.5-flash`).
    pub gemini_model: String,
    /// System instruction sent with chat generations.
    pub chat_system_instruction: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                            | Default                                      |
    /// |------------------------------------|----------------------------------------------|
    /// | `WAJIBIKA_API_HOST`                | `127.0.0.1`                                  |
    /// | `WAJIBIKA_API_PORT`                | `8080`                                       |
    /// | `WAJIBIKA_CORS_ORIGIN`             | `http://localhost:5173`                      |
    /// | `WAJIBIKA_REQUEST_TIMEOUT_SECS`    | `30`                                         |
    /// | `GEMINI_API_KEY`                   | (required)                                   |
    /// | `GEMINI_BASE_URL`                  | `https://generativelanguage.googleapis.com`  |
    /// | `GEMINI_MODEL`                     | `gemini-2.5-flash`                           |
    /// | `WAJIBIKA_CHAT_SYSTEM_INSTRUCTION` | built-in Mazingira Rafiki text               |
    pub fn from_env() -> Self {
        let host = std::env::var("WAJIBIKA_API_HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("WAJIBIKA_API_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("WAJIBIKA_API_PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("WAJIBIKA_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("WAJIBIKA_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("WAJIBIKA_REQUEST_TIMEOUT_SECS must be a valid u64");

        let gemini_api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

        let gemini_base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into());

        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());

        let chat_system_instruction = std::env::var("WAJIBIKA_CHAT_SYSTEM_INSTRUCTION")
            .unwrap_or_else(|_| DEFAULT_CHAT_SYSTEM_INSTRUCTION.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            chat_system_instruction,
        }
    }
}
