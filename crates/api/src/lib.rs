//! Wajibika generation proxy server library.
//!
//! Fronts the Gemini streaming API for the assessment and chat surfaces:
//! one `POST /api/generate` endpoint accepting the tagged
//! [`wajibika_client::WireRequest`] union and re-streaming provider text
//! as a plain-text body. Exposes the building blocks (config, state, error
//! handling, provider client, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod provider;
pub mod routes;
pub mod state;
