//! Speech engine port - the external speech-synthesis capability.
//!
//! The engine is consumed, not built: implementations wrap whatever voice
//! output the host platform offers. `SpeechController` is the only component
//! allowed to drive an engine instance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One speech-synthesis playback unit bound to a single text string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    /// Voice ID selected from the engine catalog, engine default if `None`.
    pub voice: Option<String>,
}

/// A voice offered by the engine catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub id: String,
    /// BCP-47 style locale tag (e.g. `es-MX`, `en-US`).
    pub lang: String,
    pub is_default: bool,
}

/// Errors raised when starting playback.
#[derive(Debug, Error)]
pub enum SpeechEngineError {
    /// Playback could not start (audio permission denied, device missing).
    /// Expected and recoverable, never fatal to the session.
    #[error("speech playback failed: {0}")]
    Playback(String),
}

/// Signals delivered by the engine while an utterance plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSignal {
    /// Audio finished naturally.
    Finished,
    /// Playback failed mid-utterance.
    Errored(String),
}

/// Port for a single-utterance speech engine.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechEngine: Send + Sync {
    /// The engine's voice catalog.
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Start playing one utterance. Does not cancel a previous one by
    /// itself; callers cancel first.
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechEngineError>;

    /// Suspend audio output.
    fn pause(&self);

    /// Resume audio output from the suspension point.
    fn resume(&self);

    /// Cancel any in-flight utterance. Idempotent when nothing plays.
    fn cancel(&self);

    /// Whether an utterance is live (a paused utterance still counts).
    fn is_speaking(&self) -> bool;
}

/// Pick a Spanish-locale voice from the catalog if it offers one.
///
/// Matches locale tags containing `es-` or `ES`; callers fall back to the
/// engine default voice otherwise.
#[must_use]
pub fn select_spanish_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    voices
        .iter()
        .find(|v| v.lang.contains("es-") || v.lang.contains("ES"))
}
