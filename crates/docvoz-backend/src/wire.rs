//! Wire shapes for the backend endpoints.
//!
//! Kept separate from the port surface: the backend is loose about some of
//! these (notably `/process`), so parsing tolerance lives here and the core
//! only ever sees well-formed types.

use docvoz_core::{BackendError, ParagraphInput};
use serde::Deserialize;

/// `/process` success body: either `{"paragraphs": [...]}` or a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProcessResponse {
    Wrapped { paragraphs: Vec<ParagraphInput> },
    Bare(Vec<ParagraphInput>),
}

impl ProcessResponse {
    #[must_use]
    pub fn into_paragraphs(self) -> Vec<ParagraphInput> {
        match self {
            Self::Wrapped { paragraphs } | Self::Bare(paragraphs) => paragraphs,
        }
    }
}

/// `/chat` success body.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// `/suggestions` success body; an absent list is an empty list.
#[derive(Debug, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// Non-OK error body: `{"error": ..., "message": ...}`, both optional.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Map a non-OK response to a `BackendError`.
///
/// `error == "rate_limit_exceeded"` is the distinguished case carrying a
/// user-facing message; anything else surfaces the declared error string,
/// or the raw body text when the body is not structured.
pub fn map_error(status: u16, body: &str) -> BackendError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if parsed.error.as_deref() == Some("rate_limit_exceeded") {
        return BackendError::RateLimited {
            message: parsed
                .message
                .unwrap_or_else(|| "Límite de solicitudes alcanzado".to_string()),
        };
    }
    let message = parsed.error.unwrap_or_else(|| body.trim().to_string());
    BackendError::Api { status, message }
}

/// Parse a success body, wrapping malformed JSON as `InvalidResponse`.
pub fn parse_body<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
}
