//! Client Configuration

use super::error::{Error, Result};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for a [`VectorStoreClient`](super::VectorStoreClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the vector index (all endpoint paths are appended to it)
    pub index_url: String,

    /// Static API key sent as the `Api-Key` header on every request
    pub api_key: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a config for the given index URL and API key
    pub fn new(index_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            index_url: index_url.into(),
            api_key: api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load config from `VEXA_INDEX_URL`, `VEXA_API_KEY` and `VEXA_TIMEOUT_MS`
    pub fn from_env() -> Self {
        Self {
            index_url: std::env::var("VEXA_INDEX_URL").unwrap_or_default(),
            api_key: std::env::var("VEXA_API_KEY").unwrap_or_default(),
            timeout_ms: std::env::var("VEXA_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.index_url.is_empty() {
            return Err(Error::InvalidConfig("index_url cannot be empty".into()));
        }
        if !self.index_url.starts_with("http://") && !self.index_url.starts_with("https://") {
            return Err(Error::InvalidConfig(
                "index_url must start with http:// or https://".into(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(Error::InvalidConfig("api_key cannot be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "timeout_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
