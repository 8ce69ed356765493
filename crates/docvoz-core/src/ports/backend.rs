//! Assistant backend port definition.
//!
//! The backend owns document parsing and AI inference; this port is the
//! contract the client consumes. One method per endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ParagraphInput;

/// A named citation attached to a complement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub name: String,
    pub url: String,
}

/// Backend-generated supplementary explanation for one paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complement {
    pub complement: String,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

/// Errors that can occur in backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend declared rate limiting and supplied a user-facing
    /// message. Distinguished so callers can style it apart from generic
    /// failures.
    #[error("{message}")]
    RateLimited { message: String },

    /// Non-OK status with a backend-declared error body.
    #[error("el servidor respondió {status}: {message}")]
    Api { status: u16, message: String },

    /// Network unreachable or the transport failed mid-request.
    #[error("error de red: {0}")]
    Network(String),

    /// The response body could not be parsed as expected.
    #[error("respuesta inválida del servidor: {0}")]
    InvalidResponse(String),
}

/// Port for the four assistant backend endpoints.
///
/// Every method suspends the caller until response or failure; there is no
/// client-side cancellation for in-flight requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// `POST /process` - upload a document file, receive parsed paragraphs.
    async fn process_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<ParagraphInput>, BackendError>;

    /// `POST /complement` - supplementary information for one paragraph.
    async fn complement(&self, text: &str) -> Result<Complement, BackendError>;

    /// `POST /chat` - answer a question against the full document text.
    async fn chat(&self, question: &str, document_text: &str) -> Result<String, BackendError>;

    /// `POST /suggestions` - follow-up questions for the document text.
    async fn suggestions(&self, document_text: &str) -> Result<Vec<String>, BackendError>;
}
