//! Shared reqwest client for the movie explorer API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ApiClientConfig::new("https://movie-explorer-ror-amansharma.onrender.com")
//!     .with_api_prefix("/api/v1")
//!     .with_timeout(Duration::from_secs(15));
//!
//! let client = ApiClient::new(config)?;
//! ```
//!
//! Catalogue and subscription routes live under the API prefix; account
//! routes (`/users...`) live at the server root.

use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::ErrorBody;
use crate::config::ApiConfig;
use crate::ports::ApiError;

/// Connection settings for the API.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Server origin, without trailing slash.
    pub base_url: String,
    /// Prefix for catalogue and subscription routes (default: /api/v1).
    pub api_prefix: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_prefix: "/api/v1".to_string(),
            timeout: Duration::from_secs(15),
            user_agent: concat!("movie-explorer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        ApiClientConfig::new(config.base_url.clone())
            .with_api_prefix(config.api_prefix.clone())
            .with_timeout(config.request_timeout())
            .with_user_agent(config.user_agent.clone())
    }
}

/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// URL of a route under the API prefix.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.config.base_url, self.config.api_prefix, path)
    }

    /// URL of a route at the server root.
    pub(crate) fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Sends a request, mapping transport failures.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| self.transport_error(e))
    }

    /// Sends a request and passes through only success responses.
    pub(crate) async fn send_checked(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.send(request).await?;
        check_status(response).await
    }

    /// Sends a request and decodes a successful JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send_checked(request).await?;
        decode_json(response).await
    }

    pub(crate) fn transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_connect() {
            ApiError::Network(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

/// Adds an `Authorization: Bearer` header.
pub(crate) fn bearer(request: RequestBuilder, token: &SecretString) -> RequestBuilder {
    request.header("Authorization", format!("Bearer {}", token.expose_secret()))
}

/// Turns a non-success response into `ApiError`, using the body's
/// `errors`, `error` or `message` field as the message.
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.into_message())
        .unwrap_or_default();

    match status.as_u16() {
        401 => Err(ApiError::Unauthorized(message)),
        code => Err(ApiError::status(code, message)),
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
