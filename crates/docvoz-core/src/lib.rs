//! Core domain types, ports and services for the docvoz document assistant.
//!
//! This crate is presentation-agnostic: every rendering side effect leaves
//! through the [`UiEvent`] union and every external capability (assistant
//! backend, speech engine) enters through a port trait. Adapter crates wire
//! the concrete implementations together at their composition root.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod services;
pub mod session;
pub mod speech;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{ChatMessage, MessageKind, Paragraph, ParagraphInput};
pub use events::{MessageStyle, UiCommand, UiEvent};
pub use ports::{
    AssistantBackend, BackendError, Complement, EngineSignal, NoopEmitter, SourceLink,
    SpeechEngine, SpeechEngineError, UiEventEmitter, Utterance, VoiceInfo,
};
pub use services::{
    AppCore, ChatSession, ComplementService, DocumentSession, SuggestionService,
    TranscriptExporter, FALLBACK_QUESTIONS,
};
pub use session::SessionState;
pub use speech::{PlaybackState, SpeechController};
pub use utils::sanitize_input;
