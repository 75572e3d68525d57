//! Vector Store Client
//!
//! Typed HTTP access to the hosted vector-index endpoints.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use tracing::debug;

use super::config::ClientConfig;
use super::error::{Error, Result};
use super::types::{DeleteRequest, QueryRequest, QueryResponse, UpsertRequest, Vector};

const UPSERT_PATH: &str = "/vectors/upsert";
const QUERY_PATH: &str = "/query";
const DELETE_PATH: &str = "/vectors/delete";

/// Client for a hosted vector-index HTTP API.
///
/// Stateless between calls: each operation is a single synchronous-style
/// request whose connection is scoped to the call and released once the
/// response body has been consumed. Cloning is cheap and shares the
/// underlying HTTP client.
#[derive(Clone)]
pub struct VectorStoreClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl VectorStoreClient {
    /// Create a client, validating the configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { http, config })
    }

    /// Insert or update a single vector.
    ///
    /// Returns the raw response body verbatim; the upsert response schema
    /// is not validated locally.
    pub async fn upsert(&self, vector: Vector) -> Result<String> {
        self.upsert_many(vec![vector]).await
    }

    /// Insert or update a batch of vectors in one request
    pub async fn upsert_many(&self, vectors: Vec<Vector>) -> Result<String> {
        self.post_raw(UPSERT_PATH, &UpsertRequest { vectors }).await
    }

    /// Run a similarity query
    pub async fn query(&self, request: QueryRequest) -> Result<QueryResponse> {
        let body = self.post_raw(QUERY_PATH, &request).await?;

        match serde_json::from_str(&body) {
            Ok(response) => Ok(response),
            Err(e) => Err(Error::Decoding {
                message: e.to_string(),
                body,
            }),
        }
    }

    /// Query the top-k nearest neighbors of an embedding, with metadata
    pub async fn query_values(&self, values: Vec<f64>, top_k: u32) -> Result<QueryResponse> {
        self.query(QueryRequest::by_values(values, top_k)).await
    }

    /// Delete a single vector by id; returns the raw response body
    pub async fn delete(&self, id: &str) -> Result<String> {
        self.delete_many(&[id.to_string()]).await
    }

    /// Delete a batch of vectors by id
    pub async fn delete_many(&self, ids: &[String]) -> Result<String> {
        let request = DeleteRequest { ids: ids.to_vec() };
        self.post_raw(DELETE_PATH, &request).await
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST a JSON body to `{index_url}{path}` and read the response body.
    ///
    /// Non-2xx statuses map to [`Error::Api`] with the raw body preserved.
    async fn post_raw<T: Serialize>(&self, path: &str, request: &T) -> Result<String> {
        let body = serde_json::to_vec(request)?;
        let url = self.endpoint(path)?;

        debug!(url = %url, bytes = body.len(), "sending request");

        let response = self
            .http
            .post(url)
            .header("Api-Key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.config.index_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| Error::Request(format!("{}: {}", raw, e)))
    }
}
