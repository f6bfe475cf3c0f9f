//! Completion detection over fully assembled generation output.
//!
//! Once a stream has closed, [`finalize`] decides between three outcomes:
//! the sentinel is present (clean completion, sentinel stripped), the text
//! is non-empty but the sentinel is missing (possibly truncated), or nothing
//! usable arrived at all ([`CoreError::EmptyGeneration`]). Detection is an
//! exact substring match, so a sentinel that was itself cut off mid-stream
//! reads as truncation rather than as a false positive.

use crate::error::CoreError;

/// Outcome of completion detection on assembled generation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    /// Report body with the sentinel removed and surrounding whitespace
    /// trimmed.
    pub text: String,
    /// Whether the sentinel was found (clean completion) or not (the
    /// output may have been cut off).
    pub complete: bool,
}

/// Inspect assembled output for the terminal sentinel.
///
/// - Sentinel present: returns the text with the first occurrence removed
///   and the result trimmed, `complete = true`.
/// - Sentinel absent, text non-empty: trimmed text, `complete = false`.
/// - Sentinel absent, text empty or whitespace-only:
///   [`CoreError::EmptyGeneration`]; there is nothing to show or save, which
///   callers must treat differently from a truncated report.
///
/// Pure and deterministic; no I/O.
pub fn finalize(raw_text: &str, sentinel: &str) -> Result<FinalReport, CoreError> {
    if let Some(index) = raw_text.find(sentinel) {
        let mut text = String::with_capacity(raw_text.len() - sentinel.len());
        text.push_str(&raw_text[..index]);
        text.push_str(&raw_text[index + sentinel.len()..]);
        return Ok(FinalReport {
            text: text.trim().to_string(),
            complete: true,
        });
    }

    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyGeneration);
    }

    Ok(FinalReport {
        text: trimmed.to_string(),
        complete: false,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
