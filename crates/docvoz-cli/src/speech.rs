//! Print-only speech engine for the terminal.
//!
//! There is no audio device behind the CLI; "playback" prints the utterance
//! and completes immediately, so the controller's poll finds the engine idle
//! on the next tick and settles the state machine.

use docvoz_core::{SpeechEngine, SpeechEngineError, Utterance, VoiceInfo};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ConsoleSpeech;

impl ConsoleSpeech {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SpeechEngine for ConsoleSpeech {
    fn voices(&self) -> Vec<VoiceInfo> {
        vec![VoiceInfo {
            id: "consola".to_string(),
            lang: "es-ES".to_string(),
            is_default: true,
        }]
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechEngineError> {
        println!("🔊 {}", utterance.text);
        Ok(())
    }

    fn pause(&self) {
        debug!("pause requested on console engine");
    }

    fn resume(&self) {
        debug!("resume requested on console engine");
    }

    fn cancel(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}
