//! Shared session context: the loaded document and the running transcript.
//!
//! One instance lives for the whole process and is shared by the session
//! services (`Arc<SessionState>`). The document is written by
//! `DocumentSession`, the transcript by `ChatSession`; readers get clones,
//! never lock guards.

use std::sync::{PoisonError, RwLock};

use crate::domain::{join_document_text, ChatMessage, Paragraph};

#[derive(Debug, Default)]
struct DocumentSlot {
    /// Concatenation of all paragraphs, blank-line separated.
    /// Empty string means "no document loaded".
    text: String,
    paragraphs: Vec<Paragraph>,
}

/// Process-wide session state.
#[derive(Debug, Default)]
pub struct SessionState {
    document: RwLock<DocumentSlot>,
    history: RwLock<Vec<ChatMessage>>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full document text, empty if no document is loaded.
    #[must_use]
    pub fn document_text(&self) -> String {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .text
            .clone()
    }

    /// The currently rendered paragraphs.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .paragraphs
            .clone()
    }

    /// Look up a single paragraph by index.
    #[must_use]
    pub fn paragraph(&self, index: usize) -> Option<Paragraph> {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .paragraphs
            .iter()
            .find(|p| p.index == index)
            .cloned()
    }

    /// Replace the loaded document.
    ///
    /// Prior chat history is left untouched: the transcript survives
    /// document swaps for the lifetime of the process.
    pub fn set_document(&self, paragraphs: Vec<Paragraph>) {
        let text = join_document_text(&paragraphs);
        let mut slot = self
            .document
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        slot.text = text;
        slot.paragraphs = paragraphs;
    }

    /// Append one message to the transcript. Append-only: messages are never
    /// reordered or deleted during a session.
    pub fn append_message(&self, message: ChatMessage) {
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Snapshot of the transcript in append order.
    #[must_use]
    pub fn history(&self) -> Vec<ChatMessage> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
