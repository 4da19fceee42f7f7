//! Authenticated Printful API client
//!
//! The client is bound to the vendor base URL and attaches a Basic
//! authorization header to every request. Requests are logged as
//! `METHOD path` before dispatch. There is no retry and no timeout
//! override; transport defaults apply.

use crate::error::{Error, Result};
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL of the Printful REST API
pub const BASE_URL: &str = "https://api.printful.com";

/// HTTP client bound to the Printful API
#[derive(Debug, Clone)]
pub struct PrintfulClient {
    client: Client,
    base_url: String,
}

impl PrintfulClient {
    /// Create a client for the production API endpoint
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a client against an alternate endpoint (used by tests)
    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(api_key);
        let auth = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| Error::config(format!("api_key cannot form an auth header: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("printful-source/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request against an API path.
    ///
    /// Any non-2xx response is mapped to [`Error::HttpStatus`] with the
    /// response body attached.
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.build_url(path);
        debug!("GET {path}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(response)
    }

    /// Make a GET request and parse the JSON response body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        let json: T = response.json().await.map_err(Error::Http)?;
        Ok(json)
    }

    /// Build the full URL from an API path
    pub(crate) fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
