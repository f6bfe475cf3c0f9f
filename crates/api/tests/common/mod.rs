// Shared across test binaries; each binary uses only a subset.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use wajibika_api::config::{ServerConfig, DEFAULT_CHAT_SYSTEM_INSTRUCTION};
use wajibika_api::provider::GeminiProvider;
use wajibika_api::routes;
use wajibika_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The upstream base URL points at a
/// closed local port; tests that talk upstream swap in a stub's address.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        gemini_api_key: "test-key".to_string(),
        gemini_base_url: "http://127.0.0.1:9".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        chat_system_instruction: DEFAULT_CHAT_SYSTEM_INSTRUCTION.to_string(),
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(config: ServerConfig) -> Router {
    let provider = Arc::new(GeminiProvider::new(&config));

    let state = AppState {
        config: Arc::new(config),
        provider,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Gemini stub server
// ---------------------------------------------------------------------------

/// What the stub upstream replies with.
#[derive(Clone)]
pub enum StubMode {
    /// 200 with an `alt=sse` body: one `data:` event per entry, closed by
    /// a finish event carrying no text (as the real API sends).
    Stream(Vec<&'static str>),
    /// The given status with a raw body.
    Error(StatusCode, &'static str),
}

/// One request the stub received: full URI (path and query) plus the
/// parsed JSON body.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub uri: String,
    pub body: serde_json::Value,
}

/// Handle onto a running stub upstream.
pub struct GeminiStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl GeminiStub {
    /// Snapshot of every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    mode: StubMode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn record_and_respond(
    State(state): State<StubState>,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    state.requests.lock().unwrap().push(RecordedRequest {
        uri: parts.uri.to_string(),
        body,
    });

    match &state.mode {
        StubMode::Stream(fragments) => {
            let mut sse = String::new();
            for text in fragments {
                let event = serde_json::json!({
                    "candidates": [{"content": {"parts": [{"text": text}]}}]
                });
                sse.push_str(&format!("data: {event}\n\n"));
            }
            sse.push_str(
                "data: {\"candidates\":[{\"content\":{\"parts\":[]},\"finishReason\":\"STOP\"}]}\n\n",
            );
            ([(CONTENT_TYPE, "text/event-stream")], sse).into_response()
        }
        StubMode::Error(status, body) => (*status, *body).into_response(),
    }
}

/// Start a stub Gemini server on an ephemeral port.
///
/// The stub accepts any path (the real endpoint path is asserted through
/// [`RecordedRequest::uri`]), records each request, and replies per `mode`.
pub async fn spawn_gemini_stub(mode: StubMode) -> GeminiStub {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        mode,
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .fallback(record_and_respond)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    GeminiStub {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Spawn a stub upstream and build an app wired to it.
pub async fn build_stubbed_app(mode: StubMode) -> (Router, GeminiStub) {
    let stub = spawn_gemini_stub(mode).await;
    let mut config = test_config();
    config.gemini_base_url = stub.base_url.clone();
    (build_test_app(config), stub)
}
