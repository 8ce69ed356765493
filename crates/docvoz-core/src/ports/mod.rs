//! Port definitions - trait seams toward external capabilities.
//!
//! Implementations live in adapter crates (`docvoz-backend` for HTTP, the
//! binary crates for rendering and audio). Core services depend only on
//! these traits.

mod backend;
mod event_emitter;
mod speech;

pub use backend::{AssistantBackend, BackendError, Complement, SourceLink};
pub use event_emitter::{NoopEmitter, UiEventEmitter};
pub use speech::{
    select_spanish_voice, EngineSignal, SpeechEngine, SpeechEngineError, Utterance, VoiceInfo,
};

#[cfg(test)]
pub use backend::MockAssistantBackend;
#[cfg(test)]
pub use event_emitter::testing::RecordingEmitter;
#[cfg(test)]
pub use speech::MockSpeechEngine;
