pub mod generate;
pub mod health;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /generate    POST    stream a generation (assessment report or chat turn)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate::generate))
}
