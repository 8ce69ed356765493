//! Follow-up question suggestion service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::events::UiEvent;
use crate::ports::{AssistantBackend, UiEventEmitter};
use crate::session::SessionState;

/// Static fallback shown when the backend fails or returns nothing.
pub const FALLBACK_QUESTIONS: [&str; 5] = [
    "¿Cuál es el tema principal?",
    "¿Qué métodos se mencionan?",
    "¿Cuáles son las conclusiones?",
    "¿Hay datos estadísticos relevantes?",
    "¿Qué fuentes se citan?",
];

const MAX_CHIPS: usize = 5;

/// Requests suggestion chips for the current document text.
///
/// Never raises to its caller: all failure is absorbed and converted to the
/// fallback render. Failure and empty-result are distinguished in the logs
/// even though the render is the same.
pub struct SuggestionService {
    session: Arc<SessionState>,
    backend: Arc<dyn AssistantBackend>,
    events: Arc<dyn UiEventEmitter>,
}

impl SuggestionService {
    pub fn new(
        session: Arc<SessionState>,
        backend: Arc<dyn AssistantBackend>,
        events: Arc<dyn UiEventEmitter>,
    ) -> Self {
        Self {
            session,
            backend,
            events,
        }
    }

    /// Generate suggestion chips; no-op when no document text is loaded.
    pub async fn generate(&self) {
        let document_text = self.session.document_text();
        if document_text.trim().is_empty() {
            debug!("no document text, skipping suggestion generation");
            return;
        }

        let questions = match self.backend.suggestions(&document_text).await {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) => {
                debug!("backend returned no suggestions, using fallback");
                fallback()
            }
            Err(e) => {
                warn!(error = %e, "suggestion request failed, using fallback");
                fallback()
            }
        };

        let mut chips: Vec<String> = questions
            .iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .take(MAX_CHIPS)
            .collect();
        if chips.is_empty() {
            chips = fallback();
        }

        self.events.emit(UiEvent::SuggestionsUpdated { questions: chips });
    }
}

fn fallback() -> Vec<String> {
    FALLBACK_QUESTIONS.iter().map(ToString::to_string).collect()
}
