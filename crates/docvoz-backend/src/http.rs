//! HTTP transport abstraction for the assistant backend.
//!
//! Trait-based so the client's wire parsing and error mapping can be tested
//! with canned responses. The production implementation uses reqwest.
//!
//! All four endpoints are non-idempotent POSTs against an inference
//! backend, so there is deliberately no automatic retry: a replayed `/chat`
//! bills and renders twice.

use async_trait::async_trait;
use docvoz_core::BackendError;
use url::Url;

use crate::config::BackendClientConfig;

/// Status and raw body of a backend response.
///
/// Error mapping happens above this layer; non-OK statuses are returned,
/// not converted, because error bodies carry structured content.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP transports that can POST to the backend.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body.
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, BackendError>;

    /// POST one file as a `file` multipart field.
    async fn post_file(
        &self,
        url: &Url,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<HttpResponse, BackendError>;
}

/// Production HTTP transport using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest transport with the given configuration.
    pub fn new(config: &BackendClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, BackendError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, BackendError> {
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_file(
        &self,
        url: &Url,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<HttpResponse, BackendError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::read(response).await
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::{Arc, Mutex, PoisonError};

    use super::{async_trait, BackendError, HttpBackend, HttpResponse, Url};

    /// Canned response for the fake transport.
    #[derive(Debug, Clone)]
    pub struct CannedResponse {
        pub status: u16,
        pub body: String,
    }

    impl CannedResponse {
        pub fn ok(body: &str) -> Self {
            Self {
                status: 200,
                body: body.to_string(),
            }
        }

        pub fn status(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
            }
        }
    }

    /// A fake transport returning canned responses keyed by path substring,
    /// recording every request it sees.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Mutex<Vec<(String, CannedResponse)>>,
        requests: Arc<Mutex<Vec<(String, Option<serde_json::Value>)>>>,
        fail_with: Mutex<Option<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_response(self, path_contains: &str, response: CannedResponse) -> Self {
            self.responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((path_contains.to_string(), response));
            self
        }

        /// Make every request fail with a transport error.
        #[must_use]
        pub fn failing(self, reason: &str) -> Self {
            *self.fail_with.lock().unwrap_or_else(PoisonError::into_inner) =
                Some(reason.to_string());
            self
        }

        pub fn requests(&self) -> Vec<(String, Option<serde_json::Value>)> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn respond(
            &self,
            url: &Url,
            body: Option<serde_json::Value>,
        ) -> Result<HttpResponse, BackendError> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((url.path().to_string(), body));

            if let Some(reason) = self
                .fail_with
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
            {
                return Err(BackendError::Network(reason));
            }

            let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
            for (pattern, canned) in responses.iter() {
                if url.path().contains(pattern.as_str()) {
                    return Ok(HttpResponse {
                        status: canned.status,
                        body: canned.body.clone(),
                    });
                }
            }
            Ok(HttpResponse {
                status: 404,
                body: String::new(),
            })
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json(
            &self,
            url: &Url,
            body: &serde_json::Value,
        ) -> Result<HttpResponse, BackendError> {
            self.respond(url, Some(body.clone()))
        }

        async fn post_file(
            &self,
            url: &Url,
            _file_name: &str,
            _bytes: Vec<u8>,
        ) -> Result<HttpResponse, BackendError> {
            self.respond(url, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{CannedResponse, FakeBackend};
    use super::*;

    #[test]
    fn is_ok_covers_the_2xx_range() {
        assert!(HttpResponse { status: 200, body: String::new() }.is_ok());
        assert!(HttpResponse { status: 204, body: String::new() }.is_ok());
        assert!(!HttpResponse { status: 429, body: String::new() }.is_ok());
        assert!(!HttpResponse { status: 500, body: String::new() }.is_ok());
    }

    #[tokio::test]
    async fn fake_backend_matches_by_path_and_records_requests() {
        let fake = FakeBackend::new().with_response("chat", CannedResponse::ok(r#"{"answer":"sí"}"#));
        let url = Url::parse("http://localhost:5000/chat").unwrap();

        let response = fake
            .post_json(&url, &serde_json::json!({"question": "¿sí?"}))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(fake.requests().len(), 1);
        assert_eq!(fake.requests()[0].0, "/chat");
    }

    #[tokio::test]
    async fn fake_backend_unknown_path_is_404() {
        let fake = FakeBackend::new();
        let url = Url::parse("http://localhost:5000/unknown").unwrap();
        let response = fake.post_json(&url, &serde_json::json!({})).await.unwrap();
        assert_eq!(response.status, 404);
    }
}
