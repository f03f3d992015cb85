//! HTTP client for the RAG backend.
//!
//! Provides a minimal client with generic GET/POST/DELETE helpers and one
//! domain method per backend operation (organizations, documents, chat).
//! Single attempt per call: no retries, no caching; callers own any retry
//! policy. The session and CLI crates consume this client through the
//! [`RagBackend`] trait so tests can substitute a fake backend.

pub mod api;
pub mod backend;
pub mod error;

use ragdesk_core::ClientConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use backend::RagBackend;
pub use error::RequestError;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(RequestError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from RAGDESK_API_URL / API_URL, defaulting to a
    /// local backend.
    pub fn from_env() -> Result<Self, RequestError> {
        Self::new(ClientConfig::from_env().api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError> {
        let mut request = self.client.get(self.build_url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(RequestError::Network)?;
        Self::decode(response).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let response = self
            .client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await
            .map_err(RequestError::Network)?;
        Self::decode(response).await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let response = self
            .client
            .put(self.build_url(path))
            .json(body)
            .send()
            .await
            .map_err(RequestError::Network)?;
        Self::decode(response).await
    }

    /// DELETE request. The backend sends a message body on success; only
    /// the status matters, so it is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        let response = self
            .client
            .delete(self.build_url(path))
            .send()
            .await
            .map_err(RequestError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status { status, body });
        }

        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RequestError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status { status, body });
        }

        response.json().await.map_err(RequestError::Decode)
    }
}
