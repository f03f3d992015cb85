//! Client configuration.
//!
//! The only knob is the API base URL. The backend mounts its resource
//! groups under `/api`, so the default points at a local instance with
//! that prefix already applied.

use std::env;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Configuration for the ragdesk client, read from the environment.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every request path is appended to. No trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Read configuration from RAGDESK_API_URL (or API_URL), falling back
    /// to a local backend on the default port.
    pub fn from_env() -> Self {
        let api_base_url = env::var("RAGDESK_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(api_base_url)
    }

    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
