//! Public configuration for the backend client.

use std::time::Duration;

/// Configuration for the assistant backend client.
///
/// # Example
///
/// ```
/// use docvoz_backend::BackendClientConfig;
/// use std::time::Duration;
///
/// let config = BackendClientConfig::new()
///     .with_base_url("http://127.0.0.1:5000")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct BackendClientConfig {
    /// Base URL the four endpoints hang off. A trailing path is honored,
    /// so `http://host/api/` resolves `/api/chat` and friends.
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for BackendClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            user_agent: concat!("docvoz-backend/", env!("CARGO_PKG_VERSION")).to_string(),
            // Inference-backed endpoints are slow; generous by default.
            timeout: Duration::from_secs(60),
        }
    }
}

impl BackendClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. Defaults to `http://127.0.0.1:5000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
