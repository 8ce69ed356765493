//! Per-paragraph complementary information service.

use std::sync::Arc;

use tracing::error;

use crate::events::UiEvent;
use crate::ports::{AssistantBackend, UiEventEmitter};

const MIN_COMPLEMENT_CHARS: usize = 10;
const TEXT_TOO_SHORT: &str = "Texto demasiado corto para complementar";

/// Requests complementary information for a single paragraph's text.
///
/// Calls are independent per paragraph: any number may be in flight
/// concurrently, each rendering into its own target container. A failure
/// affects only its own paragraph.
pub struct ComplementService {
    backend: Arc<dyn AssistantBackend>,
    events: Arc<dyn UiEventEmitter>,
}

impl ComplementService {
    pub fn new(backend: Arc<dyn AssistantBackend>, events: Arc<dyn UiEventEmitter>) -> Self {
        Self { backend, events }
    }

    /// Fetch the complement for one paragraph.
    ///
    /// Text under 10 trimmed characters is rejected locally with an inline
    /// notice and no request is issued.
    pub async fn fetch_complement(&self, paragraph: usize, text: &str) {
        if text.trim().chars().count() < MIN_COMPLEMENT_CHARS {
            self.events.emit(UiEvent::ComplementFailed {
                paragraph,
                message: TEXT_TOO_SHORT.to_string(),
            });
            return;
        }

        self.events.emit(UiEvent::ComplementLoading { paragraph });

        match self.backend.complement(text).await {
            Ok(complement) => self.events.emit(UiEvent::ComplementReady {
                paragraph,
                complement: normalize_newlines(&complement.complement),
                sources: complement.sources,
            }),
            Err(e) => {
                error!(error = %e, paragraph, "complement request failed");
                self.events.emit(UiEvent::ComplementFailed {
                    paragraph,
                    message: format!("Error al obtener información: {e}"),
                });
            }
        }
    }
}

/// Collapse carriage returns so renderers only deal with `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
