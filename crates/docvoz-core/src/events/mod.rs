//! Canonical command/event unions between the UI and the core.
//!
//! UI gestures arrive as typed [`UiCommand`]s dispatched through `AppCore`;
//! every rendering side effect leaves the core as a [`UiEvent`]. This keeps
//! session and playback logic decoupled from any particular presentation
//! layer and makes the whole client testable headlessly.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "typing_changed", "visible": true }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, Paragraph};
use crate::ports::SourceLink;
use crate::speech::PlaybackState;

/// How an appended chat message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    Normal,
    Error,
    /// Backend-declared rate limit, styled apart from generic errors.
    RateLimit,
}

/// Typed UI gestures consumed by `AppCore::dispatch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiCommand {
    /// A file was picked in the upload area.
    UploadFile { name: String, bytes: Vec<u8> },
    /// A question was submitted from the chat input.
    SubmitQuestion { text: String },
    /// A paragraph was clicked to request read-aloud.
    ClickParagraph { index: usize },
    /// A paragraph's complement button was clicked.
    RequestComplement { index: usize },
    /// The play/pause control was toggled.
    TogglePause,
    /// The stop control was pressed.
    StopReading,
    /// The transcript download control was pressed.
    ExportTranscript { dir: PathBuf },
}

/// Canonical event types for all adapters.
///
/// Each variant carries enough context to be self-describing; renderers
/// treat highlight and playback events as absolute state, not deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    // ========== Document Events ==========
    /// A document was parsed and its paragraphs are ready to render.
    DocumentLoaded { paragraphs: Vec<Paragraph> },

    /// A document upload was rejected or failed; shown in the upload area.
    UploadFailed { message: String },

    // ========== Chat Events ==========
    /// A message was appended to the transcript.
    MessageAppended {
        message: ChatMessage,
        style: MessageStyle,
    },

    /// The "assistant is typing" indicator flipped.
    TypingChanged { visible: bool },

    /// The suggestion chip list was replaced.
    SuggestionsUpdated { questions: Vec<String> },

    // ========== Complement Events ==========
    /// A complement request for a paragraph is in flight.
    ComplementLoading { paragraph: usize },

    /// A complement arrived for a paragraph.
    ComplementReady {
        paragraph: usize,
        complement: String,
        sources: Vec<SourceLink>,
    },

    /// A complement was rejected locally or failed; scoped to its paragraph.
    ComplementFailed { paragraph: usize, message: String },

    // ========== Playback Events ==========
    /// The highlighted paragraph changed; `None` clears the highlight.
    HighlightChanged { paragraph: Option<usize> },

    /// The playback state machine moved.
    PlaybackChanged { state: PlaybackState },

    // ========== Notices ==========
    /// A blocking user notice (playback failure, export failure).
    Notice { message: String },

    /// The transcript was written to disk.
    TranscriptExported { path: PathBuf },
}
