//! Text payload rendering rules
//!
//! Dumps are capped by character count; a dump that could not be produced at
//! all is stored as a fixed placeholder instead of failing the record.

use std::str::Utf8Error;

use thiserror::Error;

use crate::shared::constants::{ELLIPSIS, UNKNOWN_PLACEHOLDER};

/// Failure while rendering a syntax node to text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("node text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("expected field '{field}' on '{kind}' node")]
    MissingField { kind: String, field: &'static str },
}

/// Keep the first `cap` characters and append `...` when over the cap
pub fn truncate(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Truncate a rendered dump, or fall back to the placeholder
pub fn render_or_unknown(rendered: Result<String, RenderError>, cap: usize) -> String {
    match rendered {
        Ok(text) => truncate(&text, cap),
        Err(_) => UNKNOWN_PLACEHOLDER.to_string(),
    }
}

/// Character caps applied to record payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationCaps {
    /// Assigned values and conditional/while tests
    pub value: usize,
    /// For-loop targets
    pub target: usize,
}

impl Default for TruncationCaps {
    fn default() -> Self {
        Self {
            value: crate::shared::constants::VALUE_TRUNCATE,
            target: crate::shared::constants::TARGET_TRUNCATE,
        }
    }
}
