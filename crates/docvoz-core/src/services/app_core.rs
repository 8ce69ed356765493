//! Application façade wiring session services behind typed UI commands.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{error, warn};

use crate::domain::ChatMessage;
use crate::events::{MessageStyle, UiCommand, UiEvent};
use crate::ports::{AssistantBackend, EngineSignal, SpeechEngine, UiEventEmitter};
use crate::services::{
    ChatSession, ComplementService, DocumentSession, SuggestionService, TranscriptExporter,
};
use crate::session::SessionState;
use crate::speech::SpeechController;

const GREETING: &str = "¡Hola! Soy tu asistente para analizar documentos. \
Sube un archivo y hazme preguntas sobre su contenido.";

/// Composition of all session services over one shared [`SessionState`].
///
/// The four UI entry points (paragraph click, complement button, question
/// submit, file upload) are independent; `dispatch` is plain routing, not an
/// orchestration layer.
pub struct AppCore {
    session: Arc<SessionState>,
    chat: ChatSession,
    document: DocumentSession,
    complement: ComplementService,
    transcript: TranscriptExporter,
    speech: Mutex<SpeechController>,
    events: Arc<dyn UiEventEmitter>,
}

impl AppCore {
    pub fn new(
        backend: Arc<dyn AssistantBackend>,
        engine: Arc<dyn SpeechEngine>,
        events: Arc<dyn UiEventEmitter>,
    ) -> Self {
        let session = Arc::new(SessionState::new());
        let suggestions = Arc::new(SuggestionService::new(
            Arc::clone(&session),
            Arc::clone(&backend),
            Arc::clone(&events),
        ));
        Self {
            chat: ChatSession::new(
                Arc::clone(&session),
                Arc::clone(&backend),
                Arc::clone(&events),
            ),
            document: DocumentSession::new(
                Arc::clone(&session),
                Arc::clone(&backend),
                suggestions,
                Arc::clone(&events),
            ),
            complement: ComplementService::new(Arc::clone(&backend), Arc::clone(&events)),
            transcript: TranscriptExporter::new(Arc::clone(&session), Arc::clone(&events)),
            speech: Mutex::new(SpeechController::new(engine, Arc::clone(&events))),
            session,
            events,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Append the assistant's opening message.
    pub fn greet(&self) {
        let message = ChatMessage::assistant(GREETING);
        self.session.append_message(message.clone());
        self.events.emit(UiEvent::MessageAppended {
            message,
            style: MessageStyle::Normal,
        });
    }

    /// Route one typed UI command to its owning service.
    pub async fn dispatch(&self, command: UiCommand) {
        match command {
            UiCommand::UploadFile { name, bytes } => self.document.upload(&name, bytes).await,
            UiCommand::SubmitQuestion { text } => self.chat.submit_question(&text).await,
            UiCommand::ClickParagraph { index } => match self.session.paragraph(index) {
                Some(p) => self.speech().read_aloud(Some(p.index), &p.text),
                None => warn!(index, "clicked paragraph is not in the current document"),
            },
            UiCommand::RequestComplement { index } => match self.session.paragraph(index) {
                Some(p) => self.complement.fetch_complement(index, &p.text).await,
                None => warn!(index, "complement requested for unknown paragraph"),
            },
            UiCommand::TogglePause => self.speech().toggle_pause(),
            UiCommand::StopReading => self.speech().stop(),
            UiCommand::ExportTranscript { dir } => self.export_transcript(&dir).await,
        }
    }

    /// Forward a speech engine signal to the playback state machine.
    pub fn on_engine_event(&self, signal: EngineSignal) {
        self.speech().on_engine_event(signal);
    }

    /// Defensive playback completion poll; hosts call this periodically.
    pub fn tick(&self) {
        self.speech().tick();
    }

    async fn export_transcript(&self, dir: &Path) {
        if let Err(e) = self.transcript.export_to(dir).await {
            error!(error = %e, "transcript export failed");
            self.events.emit(UiEvent::Notice {
                message: format!("No se pudo exportar la conversación: {e}"),
            });
        }
    }

    fn speech(&self) -> std::sync::MutexGuard<'_, SpeechController> {
        self.speech.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
