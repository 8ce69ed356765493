//! Chat transcript export.
//!
//! The transcript is the session's only export: a plain-text file named
//! `chat_<ISO-date>.txt`, one block per message.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use crate::domain::ChatMessage;
use crate::events::UiEvent;
use crate::ports::UiEventEmitter;
use crate::session::SessionState;

const HEADER: &str = "Historial de conversación:\n\n";

/// Exports the running transcript to a plain-text file on demand.
pub struct TranscriptExporter {
    session: Arc<SessionState>,
    events: Arc<dyn UiEventEmitter>,
}

impl TranscriptExporter {
    pub fn new(session: Arc<SessionState>, events: Arc<dyn UiEventEmitter>) -> Self {
        Self { session, events }
    }

    /// Format a transcript; `None` when there is nothing to export.
    ///
    /// One block per message: speaker prefix, bracketed locale-formatted
    /// timestamp, then the text, blocks separated by a blank line.
    #[must_use]
    pub fn format(history: &[ChatMessage]) -> Option<String> {
        if history.is_empty() {
            return None;
        }
        let mut out = String::from(HEADER);
        for message in history {
            let stamp = message
                .timestamp
                .with_timezone(&Local)
                .format("%d/%m/%Y, %H:%M:%S");
            out.push_str(&format!(
                "{}[{}]\n{}\n\n",
                message.kind.export_prefix(),
                stamp,
                message.text
            ));
        }
        Some(out)
    }

    /// File name for an export performed at `now`.
    #[must_use]
    pub fn file_name(now: DateTime<Utc>) -> String {
        format!("chat_{}.txt", now.format("%Y-%m-%d"))
    }

    /// Write the transcript into `dir`; `Ok(None)` when history is empty.
    pub async fn export_to(&self, dir: &Path) -> std::io::Result<Option<PathBuf>> {
        let Some(body) = Self::format(&self.session.history()) else {
            debug!("empty transcript, nothing to export");
            return Ok(None);
        };
        let path = dir.join(Self::file_name(Utc::now()));
        tokio::fs::write(&path, body).await?;
        self.events.emit(UiEvent::TranscriptExported { path: path.clone() });
        Ok(Some(path))
    }
}
