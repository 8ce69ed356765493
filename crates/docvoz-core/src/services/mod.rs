//! Session services - the client's business logic layer.
//!
//! Thin orchestrators over ports and session state. Every fallible
//! operation catches at its own call site and converts the failure to a
//! scoped [`crate::events::UiEvent`]; nothing here is fatal to the process.

mod app_core;
mod chat;
mod complement;
mod document;
mod suggestions;
mod transcript;

pub use app_core::AppCore;
pub use chat::ChatSession;
pub use complement::ComplementService;
pub use document::DocumentSession;
pub use suggestions::{SuggestionService, FALLBACK_QUESTIONS};
pub use transcript::TranscriptExporter;
