//! Wajibika domain core: pure types and functions for impact-assessment
//! generation.
//!
//! Provides the validated form input ([`ProjectDescription`], closed
//! [`AssessmentCategory`] set), deterministic prompt construction
//! ([`build_prompt`], always ending with the [`REPORT_SENTINEL`]
//! instruction), completion detection over assembled output ([`finalize`]),
//! the conversation model with its leading-assistant-turn normalization
//! ([`ChatTurn`], [`normalize_history`]), and the saved [`Assessment`]
//! record serialized flat in camelCase to match the on-disk store format.
//!
//! This crate has no I/O and no logging; everything here is deterministic
//! and returns typed errors.

pub mod assessment;
pub mod conversation;
pub mod error;
pub mod project;
pub mod prompt;
pub mod report;

pub use assessment::Assessment;
pub use conversation::{normalize_history, ChatRole, ChatTurn};
pub use error::CoreError;
pub use project::{AssessmentCategory, ProjectDescription, ALL_CATEGORIES};
pub use prompt::{build_prompt, focus_paragraph, REPORT_SENTINEL};
pub use report::{finalize, FinalReport};
