//! Single-utterance playback state machine.
//!
//! `SpeechController` exclusively owns the speech engine instance: no other
//! component may drive it. It tracks which paragraph is highlighted, keeps
//! the play/pause/stop surface consistent, and guarantees the highlight is
//! cleared even when the engine never reports completion.
//!
//! Completion is event-driven first ([`SpeechController::on_engine_event`]);
//! [`SpeechController::tick`] is a defensive polling fallback with a bounded
//! watchdog, not the primary completion signal.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::events::UiEvent;
use crate::ports::{select_spanish_voice, EngineSignal, SpeechEngine, UiEventEmitter, Utterance};

/// Blocking notice shown when playback fails (audio permission likely denied).
pub const PLAYBACK_ERROR_NOTICE: &str =
    "Error al leer el texto. Asegúrate de permitir audio en esta página.";

/// Forced-cleanup deadline for a single utterance.
const DEFAULT_WATCHDOG: Duration = Duration::from_secs(300);

/// Playback state machine states. Cycles back to `Idle`, no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Idle,
    Speaking,
    Paused,
}

/// The at-most-one live playback session.
#[derive(Debug)]
struct PlaybackSession {
    utterance_text: String,
    /// Index of the highlighted paragraph, if playback targets one.
    paragraph: Option<usize>,
    started_at: Instant,
}

/// Owns the playback state machine and drives paragraph highlighting.
///
/// Side effects are entirely on the UI surface (highlight, playback
/// controls) via [`UiEvent`]s; the controller performs no network calls.
///
/// Adapters must deliver engine signals only for the utterance most
/// recently passed to `speak`; signals from a cancelled utterance must be
/// dropped at the adapter boundary.
pub struct SpeechController {
    engine: Arc<dyn SpeechEngine>,
    events: Arc<dyn UiEventEmitter>,
    state: PlaybackState,
    session: Option<PlaybackSession>,
    watchdog: Duration,
}

impl SpeechController {
    pub fn new(engine: Arc<dyn SpeechEngine>, events: Arc<dyn UiEventEmitter>) -> Self {
        Self {
            engine,
            events,
            state: PlaybackState::Idle,
            session: None,
            watchdog: DEFAULT_WATCHDOG,
        }
    }

    /// Override the watchdog deadline for forced cleanup.
    #[must_use]
    pub const fn with_watchdog(mut self, watchdog: Duration) -> Self {
        self.watchdog = watchdog;
        self
    }

    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the currently highlighted paragraph, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.paragraph)
    }

    /// Request read-aloud for a paragraph's text.
    ///
    /// Called while `Paused` with the same text, this resumes instead of
    /// restarting (toggle semantics). Any other case supersedes: the current
    /// utterance is cancelled and the new one starts, last request wins.
    pub fn read_aloud(&mut self, paragraph: Option<usize>, text: &str) {
        if self.state == PlaybackState::Paused
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.utterance_text == text)
        {
            self.engine.resume();
            self.set_state(PlaybackState::Speaking);
            return;
        }
        self.start(paragraph, text);
    }

    fn start(&mut self, paragraph: Option<usize>, text: &str) {
        // Cancel any in-flight utterance first; idempotent if none.
        self.engine.cancel();

        // Clear the previous highlight before setting the new one.
        if let Some(prev) = self.session.take() {
            if prev.paragraph.is_some() {
                self.events.emit(UiEvent::HighlightChanged { paragraph: None });
            }
        }

        let voice = select_spanish_voice(&self.engine.voices()).map(|v| v.id.clone());
        let utterance = Utterance {
            text: text.to_string(),
            voice,
        };

        match self.engine.speak(&utterance) {
            Ok(()) => {
                self.session = Some(PlaybackSession {
                    utterance_text: utterance.text,
                    paragraph,
                    started_at: Instant::now(),
                });
                if paragraph.is_some() {
                    self.events.emit(UiEvent::HighlightChanged { paragraph });
                }
                self.set_state(PlaybackState::Speaking);
            }
            Err(e) => {
                error!(error = %e, "speech playback failed to start");
                self.set_state(PlaybackState::Idle);
                self.events.emit(UiEvent::Notice {
                    message: PLAYBACK_ERROR_NOTICE.to_string(),
                });
            }
        }
    }

    /// Flip `Speaking` and `Paused`; no-op while `Idle`.
    pub fn toggle_pause(&mut self) {
        match self.state {
            PlaybackState::Idle => {}
            PlaybackState::Speaking => {
                self.engine.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Paused => {
                self.engine.resume();
                self.set_state(PlaybackState::Speaking);
            }
        }
    }

    /// Cancel playback and clear the session. Idempotent, safe from `Idle`.
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Idle {
            return;
        }
        self.engine.cancel();
        self.clear();
    }

    /// Handle a completion or failure signal from the engine.
    pub fn on_engine_event(&mut self, signal: EngineSignal) {
        if self.state == PlaybackState::Idle {
            // Stale signal after stop or supersede.
            return;
        }
        match signal {
            EngineSignal::Finished => {
                debug!("utterance finished");
                self.clear();
            }
            EngineSignal::Errored(reason) => {
                error!(%reason, "speech engine reported playback failure");
                self.clear();
                self.events.emit(UiEvent::Notice {
                    message: PLAYBACK_ERROR_NOTICE.to_string(),
                });
            }
        }
    }

    /// Defensive completion poll.
    ///
    /// A stuck highlight is a visible bug, so hosts call this periodically:
    /// if the engine went quiet without a signal, or the watchdog deadline
    /// passed, the session is force-completed.
    pub fn tick(&mut self) {
        if self.state == PlaybackState::Idle {
            return;
        }
        let expired = self
            .session
            .as_ref()
            .is_some_and(|s| s.started_at.elapsed() >= self.watchdog);
        if expired {
            warn!("playback watchdog expired, forcing cleanup");
            self.engine.cancel();
            self.clear();
            return;
        }
        if !self.engine.is_speaking() {
            debug!("engine idle without a completion signal, clearing playback");
            self.clear();
        }
    }

    fn clear(&mut self) {
        if let Some(session) = self.session.take() {
            if session.paragraph.is_some() {
                self.events.emit(UiEvent::HighlightChanged { paragraph: None });
            }
        }
        self.set_state(PlaybackState::Idle);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.events.emit(UiEvent::PlaybackChanged { state });
        }
    }
}
