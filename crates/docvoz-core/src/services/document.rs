//! Document session service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{normalize_paragraphs, ParagraphInput};
use crate::events::UiEvent;
use crate::ports::{AssistantBackend, UiEventEmitter};
use crate::services::SuggestionService;
use crate::session::SessionState;

const UNSUPPORTED_FILE: &str = "Solo se permiten archivos PDF (.pdf) o Word (.docx)";

/// Turns an uploaded file's backend-parsed paragraphs into the session's
/// document text and triggers suggestion generation.
pub struct DocumentSession {
    session: Arc<SessionState>,
    backend: Arc<dyn AssistantBackend>,
    suggestions: Arc<SuggestionService>,
    events: Arc<dyn UiEventEmitter>,
}

impl DocumentSession {
    pub fn new(
        session: Arc<SessionState>,
        backend: Arc<dyn AssistantBackend>,
        suggestions: Arc<SuggestionService>,
        events: Arc<dyn UiEventEmitter>,
    ) -> Self {
        Self {
            session,
            backend,
            suggestions,
            events,
        }
    }

    /// Upload a document file and load its parsed paragraphs.
    ///
    /// Unsupported extensions are rejected before any request is issued.
    /// Failures stay scoped to the upload area; the rest of the session
    /// remains usable.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) {
        if !is_supported_document(file_name) {
            self.events.emit(UiEvent::UploadFailed {
                message: UNSUPPORTED_FILE.to_string(),
            });
            return;
        }

        match self.backend.process_file(file_name, bytes).await {
            Ok(inputs) => self.load_paragraphs(inputs).await,
            Err(e) => {
                error!(error = %e, file_name, "document processing failed");
                self.events.emit(UiEvent::UploadFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Normalize parsed paragraphs into the session document and trigger
    /// exactly one suggestion generation.
    ///
    /// An empty input sequence renders an empty document silently; the
    /// suggestion service then no-ops on the empty text.
    pub async fn load_paragraphs(&self, inputs: Vec<ParagraphInput>) {
        let paragraphs = normalize_paragraphs(inputs);
        debug!(count = paragraphs.len(), "document loaded");
        self.session.set_document(paragraphs.clone());
        self.events.emit(UiEvent::DocumentLoaded { paragraphs });
        self.suggestions.generate().await;
    }
}

/// Accept only the extensions the backend parser understands.
fn is_supported_document(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.ends_with(".pdf") || lower.ends_with(".docx")
}
