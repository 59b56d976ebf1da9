//! # HTTP resource client
//!
//! [`ApiClient`] is a thin wrapper around [`reqwest::Client`] that every
//! Launchpad request goes through. It adds exactly three things:
//!
//! - a **cookie store**, so the server's session cookie rides along on every
//!   request — the API identifies the user from it, which makes this a hard
//!   requirement of the contract, not an option;
//! - **base-URL joining** against the configured API root;
//! - **error normalization**: non-2xx responses become
//!   [`ApiError::Api`] carrying the server's `message` field (or a
//!   per-endpoint fallback), transport failures become [`ApiError::Network`].
//!
//! The client is cheap to clone; clones share the same connection pool and
//! cookie store.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::ApiError;

/// Shared HTTP client for the Launchpad API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl Default for ApiClient {
    /// Client against the environment-configured base URL.
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl ApiClient {
    /// Create a client against an explicit base URL (no trailing slash
    /// needed). Tests use this to point at a mock server.
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET `path` and deserialize a JSON response body.
    pub async fn get_json<T>(&self, path: &str, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.get(self.endpoint(path)).send().await?;
        Self::parse_json(response, fallback).await
    }

    /// POST a JSON body to `path` and deserialize a JSON response body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        Self::parse_json(response, fallback).await
    }

    /// POST with no request body, ignoring any response payload.
    pub async fn post_empty(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let response = self.http.post(self.endpoint(path)).send().await?;
        Self::check_status(response, fallback).await.map(|_| ())
    }

    /// PUT a JSON body to `path`, ignoring any response payload.
    pub async fn put_json<B>(&self, path: &str, body: &B, fallback: &str) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.http.put(self.endpoint(path)).json(body).send().await?;
        Self::check_status(response, fallback).await.map(|_| ())
    }

    /// DELETE `path`, ignoring any response payload.
    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.endpoint(path)).send().await?;
        Self::check_status(response, fallback).await.map(|_| ())
    }

    async fn parse_json<T>(response: Response, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = Self::check_status(response, fallback).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: Response, fallback: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Error body may be empty or non-JSON; the fallback covers both.
        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message: extract_message(&body, fallback),
        })
    }
}

/// Pull the server's `message` field out of an error body, falling back to
/// `fallback` when the body is missing, not JSON, or has no such field.
fn extract_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| fallback.to_string())
}
