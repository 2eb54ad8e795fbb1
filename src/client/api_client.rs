use std::env;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::client::error::{ClientError, ClientResult};
use crate::client::response::ApiResponse;

/// Hosted BsonDB origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://bsondb.up.railway.app";

/// Environment variable overriding the API origin.
pub const API_URL_ENV: &str = "BSONDB_API_URL";

/// HTTP dispatcher for the BsonDB REST API.
///
/// Holds the base URL and a shared `reqwest` client. Cloning is cheap and
/// every request is independent, so one instance can serve any number of
/// call sites.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client without a request timeout.
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. BSONDB_API_URL environment variable
    /// 3. Default: https://bsondb.up.railway.app
    pub fn new(api_url: Option<String>) -> ClientResult<Self> {
        Self::with_timeout(api_url, None)
    }

    /// Create a new API client, optionally bounding each request by `timeout`.
    pub fn with_timeout(api_url: Option<String>, timeout: Option<Duration>) -> ClientResult<Self> {
        // Already installed is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ClientError::Transport { source })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `<base-url><path>` with a JSON content type and,
    /// when given, a JSON-serialized body.
    pub fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<reqwest::RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| ClientError::Encode {
                message: e.to_string(),
            })?;
            builder = builder.body(payload);
        }

        Ok(builder)
    }

    /// Send a request and reject any status outside 200..=299.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Response> {
        debug!(%method, path, "sending request");
        let response = self
            .request(method, path, body)?
            .send()
            .await
            .map_err(|source| ClientError::Transport { source })?;

        Self::check_status(response).await
    }

    /// Dispatch a request and return the raw response payload.
    pub async fn request_bytes<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse> {
        let response = self.send(method, path, body).await?;
        let payload = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport { source })?;
        Ok(ApiResponse::from(payload.to_vec()))
    }

    /// Dispatch a request and decode the response as a JSON object.
    pub async fn request_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Map<String, Value>> {
        self.request_bytes(method, path, body).await?.json()
    }

    /// Pass successful responses through, turn everything else into
    /// `ClientError::HttpStatus`.
    pub async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "request rejected");
        Err(ClientError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}
