//! Streaming client for the Wajibika completion boundary.
//!
//! Provides [`CompletionClient`] (one POST per generation, incremental body
//! decoding, single in-flight enforcement), the [`GenerationRequest`] /
//! [`WireRequest`] request union, and [`StreamDecoder`], the UTF-8 decoder
//! that survives chunk splits inside multi-byte characters.
//!
//! The generation flow: build a [`GenerationRequest`], call
//! [`CompletionClient::stream_completion`] with a chunk callback, then run
//! the assembled text through [`wajibika_core::finalize`] to detect clean
//! completion. Everything here fails with a typed [`GenerateError`]; the
//! crate never logs.

pub mod client;
pub mod decode;
pub mod error;
pub mod request;

pub use client::CompletionClient;
pub use decode::StreamDecoder;
pub use error::GenerateError;
pub use request::{AssessmentPayload, ChatPayload, GenerationRequest, WireRequest};
