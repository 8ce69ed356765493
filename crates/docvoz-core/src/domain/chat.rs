//! Chat transcript domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session transcript.
///
/// Every user-submitted question and every assistant or error response
/// produces exactly one message, appended in the order sent/received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub kind: MessageKind,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time.
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    /// A question typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::User)
    }

    /// An answer produced by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Assistant)
    }

    /// A chat-visible error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error)
    }
}

/// What produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Assistant,
    Error,
}

impl MessageKind {
    /// Parse a kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Convert kind to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }

    /// Speaker prefix used in exported transcripts.
    #[must_use]
    pub const fn export_prefix(&self) -> &'static str {
        match self {
            Self::User => "Tú: ",
            Self::Assistant => "Asistente: ",
            Self::Error => "ERROR: ",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
