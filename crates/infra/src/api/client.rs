//! API client for the diary backend
//!
//! Provides an HTTP-based JSON client with bearer authentication and
//! domain-error mapping. Transport retries live in [`HttpClient`].

use std::sync::Arc;
use std::time::Duration;

use playerlog_domain::{ApiConfig, Error, Result};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::auth::AccessTokenProvider;
use crate::http::HttpClient;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// JSON API client
pub struct ApiClient {
    http_client: HttpClient,
    tokens: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: ApiClientConfig, tokens: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self { http_client, tokens, config })
    }

    /// Execute a GET request and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns the mapped status error for non-success responses.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        Self::parse_body(response).await
    }

    /// Execute a POST request with a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Returns the mapped status error for non-success responses.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Self::parse_body(response).await
    }

    /// Execute a PUT request with a JSON body and deserialize the response.
    ///
    /// # Errors
    ///
    /// Returns the mapped status error for non-success responses.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        Self::parse_body(response).await
    }

    /// Execute a DELETE request, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns the mapped status error for non-success responses.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn execute<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%method, url = %url, "API request");

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json");

        // Mirrors the mobile client's interceptor: attach the bearer token
        // whenever one is on file, on every endpoint.
        if let Some(token) = self.tokens.access_token()? {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(map_status_error(status, &url, &body))
        }
    }

    async fn parse_body<R: DeserializeOwned>(response: Response) -> Result<R> {
        let status = response.status();

        // 204/205 carry no body per the RFC; only `()`-like targets can
        // absorb that.
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                Error::Internal(format!(
                    "no content response ({}), but response type cannot be deserialized from an empty body",
                    status.as_u16()
                ))
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Internal(format!("failed to parse response: {e}")))
    }
}

fn map_status_error(status: StatusCode, url: &str, body: &str) -> Error {
    let message = if body.is_empty() {
        format!("{url} returned status {status}")
    } else {
        format!("{url} returned status {status}: {body}")
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Error::Auth(message)
    } else if status == StatusCode::NOT_FOUND {
        Error::NotFound(message)
    } else if status.is_client_error() {
        Error::InvalidInput(message)
    } else {
        Error::Network(message)
    }
}
