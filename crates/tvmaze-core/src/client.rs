//! HTTP client for the TVmaze API
//!
//! This module provides a thin HTTP client for api.tvmaze.com. Each widget
//! operation issues exactly one GET request; there is no retry, caching, or
//! rate limiting.

use std::time::Duration;

use crate::error::{CatalogError, Result};

/// Base URL for the TVmaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("tvmaze-search-widget/", env!("CARGO_PKG_VERSION"));

/// Configuration for the TVmaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog API (default: `TVMAZE_BASE_URL`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the TVmaze API
///
/// Wraps a `reqwest::Client` with the widget's fixed headers and timeout.
/// The base URL is configurable so tests can point the client at a local
/// mock server.
pub struct TvmazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL requests are issued against
    base_url: String,
}

impl TvmazeClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch the response body from a catalog path.
    ///
    /// # Arguments
    /// * `path` - Relative path on the catalog API (e.g., "/search/shows?q=girls")
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `CatalogError::NotFound` - Server returned 404
    /// - `CatalogError::HttpError` - Network failure or other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url));
        }

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
