//! Chat session service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::ChatMessage;
use crate::events::{MessageStyle, UiEvent};
use crate::ports::{AssistantBackend, BackendError, UiEventEmitter};
use crate::session::SessionState;
use crate::utils::sanitize_input;

const MIN_QUESTION_CHARS: usize = 3;
const QUESTION_TOO_SHORT: &str = "La pregunta debe tener al menos 3 caracteres";
const NO_DOCUMENT_LOADED: &str =
    "Primero sube un documento para poder responder tus preguntas";

/// Validates and sends user questions against the loaded document.
///
/// The typing indicator is a singleton keyed by visibility, not by request:
/// when two questions are in flight, whichever response arrives first hides
/// the shared indicator. Correlating indicator state to requests would
/// change observable behavior, so the original semantics are kept.
pub struct ChatSession {
    session: Arc<SessionState>,
    backend: Arc<dyn AssistantBackend>,
    events: Arc<dyn UiEventEmitter>,
    typing: AtomicBool,
}

impl ChatSession {
    pub fn new(
        session: Arc<SessionState>,
        backend: Arc<dyn AssistantBackend>,
        events: Arc<dyn UiEventEmitter>,
    ) -> Self {
        Self {
            session,
            backend,
            events,
            typing: AtomicBool::new(false),
        }
    }

    /// Whether the typing indicator is currently shown.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::SeqCst)
    }

    /// Sanitize, validate and submit one question.
    ///
    /// The user's own message is appended synchronously before the request
    /// is issued, so it always precedes any response to it in the
    /// transcript. Local rejections never reach the network.
    pub async fn submit_question(&self, raw: &str) {
        let question = sanitize_input(raw);
        if question.chars().count() < MIN_QUESTION_CHARS {
            self.reject(QUESTION_TOO_SHORT);
            return;
        }

        let document_text = self.session.document_text();
        if document_text.is_empty() {
            self.reject(NO_DOCUMENT_LOADED);
            return;
        }

        self.append(ChatMessage::user(question.clone()), MessageStyle::Normal);
        self.show_typing();

        match self.backend.chat(&question, &document_text).await {
            Ok(answer) => {
                self.hide_typing();
                self.append(ChatMessage::assistant(answer), MessageStyle::Normal);
            }
            Err(BackendError::RateLimited { message }) => {
                debug!("chat request rate limited");
                self.hide_typing();
                self.append(ChatMessage::error(message), MessageStyle::RateLimit);
            }
            Err(e) => {
                error!(error = %e, "chat request failed");
                self.hide_typing();
                self.append(ChatMessage::error(format!("Error: {e}")), MessageStyle::Error);
            }
        }
    }

    /// Chat-visible rejection: one error entry, no network call.
    fn reject(&self, message: &str) {
        self.append(ChatMessage::error(message), MessageStyle::Error);
    }

    fn append(&self, message: ChatMessage, style: MessageStyle) {
        self.session.append_message(message.clone());
        self.events.emit(UiEvent::MessageAppended { message, style });
    }

    /// Idempotent: showing while already shown is a no-op.
    fn show_typing(&self) {
        if !self.typing.swap(true, Ordering::SeqCst) {
            self.events.emit(UiEvent::TypingChanged { visible: true });
        }
    }

    fn hide_typing(&self) {
        if self.typing.swap(false, Ordering::SeqCst) {
            self.events.emit(UiEvent::TypingChanged { visible: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, Paragraph};
    use crate::ports::{MockAssistantBackend, RecordingEmitter};

    fn session_with_document() -> Arc<SessionState> {
        let session = Arc::new(SessionState::new());
        session.set_document(vec![Paragraph {
            index: 0,
            text: "El documento trata de abejas.".to_string(),
        }]);
        session
    }

    fn chat(
        session: Arc<SessionState>,
        backend: MockAssistantBackend,
    ) -> (ChatSession, RecordingEmitter) {
        let emitter = RecordingEmitter::new();
        let chat = ChatSession::new(session, Arc::new(backend), Arc::new(emitter.clone()));
        (chat, emitter)
    }

    fn appended(events: &[UiEvent]) -> Vec<(MessageKind, MessageStyle)> {
        events
            .iter()
            .filter_map(|e| match e {
                UiEvent::MessageAppended { message, style } => Some((message.kind, *style)),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn short_question_is_rejected_without_network_call() {
        let mut backend = MockAssistantBackend::new();
        backend.expect_chat().times(0);
        let (chat, emitter) = chat(session_with_document(), backend);

        chat.submit_question("  ab  ").await;

        assert_eq!(
            appended(&emitter.events()),
            vec![(MessageKind::Error, MessageStyle::Error)]
        );
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn empty_document_is_rejected_without_network_call() {
        let mut backend = MockAssistantBackend::new();
        backend.expect_chat().times(0);
        let (chat, emitter) = chat(Arc::new(SessionState::new()), backend);

        chat.submit_question("¿De qué trata el documento?").await;

        let events = emitter.events();
        assert!(matches!(
            &events[0],
            UiEvent::MessageAppended { message, .. } if message.text == NO_DOCUMENT_LOADED
        ));
    }

    #[tokio::test]
    async fn answer_is_appended_after_the_user_message() {
        let mut backend = MockAssistantBackend::new();
        backend
            .expect_chat()
            .times(1)
            .returning(|_, _| Ok("Trata de abejas.".to_string()));
        let session = session_with_document();
        let (chat, emitter) = chat(Arc::clone(&session), backend);

        chat.submit_question("¿De qué trata?").await;

        assert_eq!(
            appended(&emitter.events()),
            vec![
                (MessageKind::User, MessageStyle::Normal),
                (MessageKind::Assistant, MessageStyle::Normal),
            ]
        );
        // Transcript mirrors the rendered order.
        let history = session.history();
        assert_eq!(history[0].kind, MessageKind::User);
        assert_eq!(history[1].kind, MessageKind::Assistant);
    }

    #[tokio::test]
    async fn typing_indicator_flips_around_the_request() {
        let mut backend = MockAssistantBackend::new();
        backend
            .expect_chat()
            .returning(|_, _| Ok("respuesta".to_string()));
        let (chat, emitter) = chat(session_with_document(), backend);

        chat.submit_question("¿De qué trata?").await;

        let typing: Vec<bool> = emitter
            .events()
            .iter()
            .filter_map(|e| match e {
                UiEvent::TypingChanged { visible } => Some(*visible),
                _ => None,
            })
            .collect();
        assert_eq!(typing, vec![true, false]);
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn rate_limit_message_is_styled_distinctly_and_verbatim() {
        let mut backend = MockAssistantBackend::new();
        backend.expect_chat().returning(|_, _| {
            Err(BackendError::RateLimited {
                message: "Demasiadas solicitudes, espera un minuto".to_string(),
            })
        });
        let (chat, emitter) = chat(session_with_document(), backend);

        chat.submit_question("¿De qué trata?").await;

        let events = emitter.events();
        assert!(events.iter().any(|e| matches!(
            e,
            UiEvent::MessageAppended { message, style: MessageStyle::RateLimit }
                if message.text == "Demasiadas solicitudes, espera un minuto"
        )));
        assert!(!chat.is_typing());
    }

    #[tokio::test]
    async fn generic_failure_is_wrapped_with_error_prefix() {
        let mut backend = MockAssistantBackend::new();
        backend
            .expect_chat()
            .returning(|_, _| Err(BackendError::Network("connection refused".to_string())));
        let (chat, emitter) = chat(session_with_document(), backend);

        chat.submit_question("¿De qué trata?").await;

        assert!(emitter.events().iter().any(|e| matches!(
            e,
            UiEvent::MessageAppended { message, style: MessageStyle::Error }
                if message.text.starts_with("Error: ")
        )));
    }

    #[tokio::test]
    async fn first_arriving_response_hides_the_shared_typing_indicator() {
        use std::sync::atomic::AtomicUsize;

        use async_trait::async_trait;
        use tokio::sync::Notify;

        use crate::domain::ParagraphInput;
        use crate::ports::Complement;

        /// First chat call blocks until released; later calls answer at once.
        #[derive(Default)]
        struct GatedBackend {
            calls: AtomicUsize,
            first_in_flight: Notify,
            release_first: Notify,
        }

        #[async_trait]
        impl AssistantBackend for GatedBackend {
            async fn process_file(
                &self,
                _file_name: &str,
                _bytes: Vec<u8>,
            ) -> Result<Vec<ParagraphInput>, BackendError> {
                unimplemented!()
            }

            async fn complement(&self, _text: &str) -> Result<Complement, BackendError> {
                unimplemented!()
            }

            async fn chat(
                &self,
                _question: &str,
                _document_text: &str,
            ) -> Result<String, BackendError> {
                if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    self.first_in_flight.notify_one();
                    self.release_first.notified().await;
                    Ok("primera respuesta".to_string())
                } else {
                    Ok("segunda respuesta".to_string())
                }
            }

            async fn suggestions(&self, _document_text: &str) -> Result<Vec<String>, BackendError> {
                unimplemented!()
            }
        }

        fn typing_flips(events: &[UiEvent]) -> Vec<bool> {
            events
                .iter()
                .filter_map(|e| match e {
                    UiEvent::TypingChanged { visible } => Some(*visible),
                    _ => None,
                })
                .collect()
        }

        let backend = Arc::new(GatedBackend::default());
        let emitter = RecordingEmitter::new();
        let chat = Arc::new(ChatSession::new(
            session_with_document(),
            Arc::clone(&backend) as Arc<dyn AssistantBackend>,
            Arc::new(emitter.clone()),
        ));

        let first = tokio::spawn({
            let chat = Arc::clone(&chat);
            async move { chat.submit_question("¿primera pregunta?").await }
        });
        backend.first_in_flight.notified().await;
        assert!(chat.is_typing());

        // The second question completes while the first is still pending;
        // its response hides the shared indicator.
        chat.submit_question("¿segunda pregunta?").await;
        assert!(!chat.is_typing());
        assert_eq!(typing_flips(&emitter.events()), vec![true, false]);

        // The late first response finds the indicator already hidden and
        // emits no further flips.
        backend.release_first.notify_one();
        first.await.unwrap();
        assert_eq!(typing_flips(&emitter.events()), vec![true, false]);
    }

    #[tokio::test]
    async fn question_is_sanitized_before_submission() {
        let mut backend = MockAssistantBackend::new();
        backend
            .expect_chat()
            .withf(|question, _| !question.contains('<'))
            .returning(|_, _| Ok("ok".to_string()));
        let (chat, _emitter) = chat(session_with_document(), backend);

        chat.submit_question("<b>¿qué dice?</b>").await;
    }
}
