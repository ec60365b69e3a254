//! JSON HTTP client
//!
//! A thin GET client for listing endpoints: base URL joining, default
//! headers, per-request query pairs, request pacing, and typed status
//! classification. A 404 surfaces as [`Error::NotFound`] so fallback
//! policies can recognize it; every other non-2xx status is
//! [`Error::HttpStatus`]. The client performs no retries; failed calls
//! propagate to the caller.

use super::pace::{Pacer, PacerConfig};
use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Request pacing, applied before every fetch
    pub pace: Option<PacerConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            pace: None,
            default_headers: HashMap::new(),
            user_agent: format!("pagewalk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Pace requests with a token bucket
    #[must_use]
    pub fn pace(mut self, config: PacerConfig) -> Self {
        self.config.pace = Some(config);
        self
    }

    /// Add a default header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// JSON GET client for listing endpoints
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    pacer: Option<Pacer>,
}

impl HttpClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        let pacer = config.pace.as_ref().map(Pacer::new);

        Self {
            client,
            config,
            pacer,
        }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// GET a JSON document
    pub async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value> {
        if let Some(ref pacer) = self.pacer {
            pacer.wait().await;
        }

        let full_url = self.build_url(url);
        let mut req = self.client.get(&full_url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found(full_url));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!(url = %full_url, "GET succeeded");
        let body: Value = response.json().await?;
        Ok(body)
    }

    /// GET a JSON document, mapping a 404 to `None`
    ///
    /// Convenience for single-item call sites; other errors propagate.
    pub async fn get_json_opt(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Option<Value>> {
        match self.get_json(url, query).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Build the full URL from a path or pass an absolute URL through
    pub(super) fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_pacer", &self.pacer.is_some())
            .finish_non_exhaustive()
    }
}
