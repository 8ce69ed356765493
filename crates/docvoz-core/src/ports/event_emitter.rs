//! Event emitter trait for delivering UI events to the rendering layer.
//!
//! Implementations handle transport details (terminal rendering, channels,
//! web bridges). Core services emit and move on; emission never blocks and
//! never fails back into the core.

use crate::events::UiEvent;

/// Trait for emitting UI events.
///
/// # Implementations
///
/// - [`NoopEmitter`] - for tests and contexts with no listener
/// - Adapter-specific renderers (terminal, SSE, etc.)
pub trait UiEventEmitter: Send + Sync {
    /// Emit one UI event. Must not block.
    fn emit(&self, event: UiEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// Enables cloning of `Arc<dyn UiEventEmitter>` without requiring the
    /// underlying type to implement `Clone`.
    fn clone_box(&self) -> Box<dyn UiEventEmitter>;
}

/// A no-op event emitter for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UiEventEmitter for NoopEmitter {
    fn emit(&self, _event: UiEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn UiEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::{Arc, Mutex, PoisonError};

    use super::{UiEvent, UiEventEmitter};

    /// Records every emitted event for later assertions.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingEmitter {
        events: Arc<Mutex<Vec<UiEvent>>>,
    }

    impl RecordingEmitter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<UiEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl UiEventEmitter for RecordingEmitter {
        fn emit(&self, event: UiEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }

        fn clone_box(&self) -> Box<dyn UiEventEmitter> {
            Box::new(self.clone())
        }
    }
}
