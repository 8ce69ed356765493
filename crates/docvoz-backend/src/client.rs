//! The backend client implementing the core's `AssistantBackend` port.

use async_trait::async_trait;
use docvoz_core::{AssistantBackend, BackendError, Complement, ParagraphInput};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::config::BackendClientConfig;
use crate::http::{HttpBackend, HttpResponse, ReqwestBackend};
use crate::wire::{map_error, parse_body, ChatResponse, ProcessResponse, SuggestionsResponse};

/// The four endpoint URLs, resolved once at construction.
#[derive(Debug, Clone)]
struct Endpoints {
    process: Url,
    complement: Url,
    chat: Url,
    suggestions: Url,
}

impl Endpoints {
    fn resolve(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            process: base.join("process")?,
            complement: base.join("complement")?,
            chat: base.join("chat")?,
            suggestions: base.join("suggestions")?,
        })
    }
}

/// Assistant backend client, generic over the HTTP transport.
pub struct DocvozClient<B: HttpBackend> {
    http: B,
    endpoints: Endpoints,
}

/// The production client over reqwest.
pub type DefaultDocvozClient = DocvozClient<ReqwestBackend>;

impl DefaultDocvozClient {
    /// Build a client from configuration.
    ///
    /// Fails only when the configured base URL does not parse.
    pub fn from_config(config: &BackendClientConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: ReqwestBackend::new(config),
            endpoints: Endpoints::resolve(&config.base_url)?,
        })
    }
}

impl<B: HttpBackend> DocvozClient<B> {
    /// Build a client over a custom transport.
    pub fn with_backend(http: B, config: &BackendClientConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            endpoints: Endpoints::resolve(&config.base_url)?,
        })
    }

    fn check(response: HttpResponse) -> Result<String, BackendError> {
        if response.is_ok() {
            Ok(response.body)
        } else {
            Err(map_error(response.status, &response.body))
        }
    }
}

#[async_trait]
impl<B: HttpBackend> AssistantBackend for DocvozClient<B> {
    async fn process_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<ParagraphInput>, BackendError> {
        debug!(file_name, size = bytes.len(), "uploading document");
        let response = self
            .http
            .post_file(&self.endpoints.process, file_name, bytes)
            .await?;
        let body = Self::check(response)?;
        let parsed: ProcessResponse = parse_body(&body)?;
        Ok(parsed.into_paragraphs())
    }

    async fn complement(&self, text: &str) -> Result<Complement, BackendError> {
        let response = self
            .http
            .post_json(&self.endpoints.complement, &json!({ "text": text }))
            .await?;
        let body = Self::check(response)?;
        parse_body(&body)
    }

    async fn chat(&self, question: &str, document_text: &str) -> Result<String, BackendError> {
        let response = self
            .http
            .post_json(
                &self.endpoints.chat,
                &json!({ "question": question, "document_text": document_text }),
            )
            .await?;
        let body = Self::check(response)?;
        let parsed: ChatResponse = parse_body(&body)?;
        Ok(parsed.answer)
    }

    async fn suggestions(&self, document_text: &str) -> Result<Vec<String>, BackendError> {
        let response = self
            .http
            .post_json(
                &self.endpoints.suggestions,
                &json!({ "document_text": document_text }),
            )
            .await?;
        let body = Self::check(response)?;
        let parsed: SuggestionsResponse = parse_body(&body)?;
        Ok(parsed.questions)
    }
}
