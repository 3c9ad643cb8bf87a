//! Storefront REST API client.
//!
//! Every call goes to `{STORE_API_URL}api/...`. Authenticated calls carry the
//! admin token in a custom `token` header. Responses use a loose envelope:
//!
//! ```json
//! { "success": true, "products": [ ... ] }
//! { "success": false, "message": "Not Authorized Login Again" }
//! ```
//!
//! An explicit `success: false` becomes [`ApiError::Rejected`] with the
//! server's message. Non-2xx statuses become [`ApiError::Status`]. Transport
//! failures become [`ApiError::Http`]. Nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_admin::api::ApiClient;
//!
//! let client = ApiClient::new(&config.api)?;
//! let token = client.admin_login(&email, &password).await?;
//! let orders = client.list_orders(&token).await?;
//! ```

mod accounts;
mod catalog;
mod content;
mod orders;
mod reports;

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::StoreApiConfig;

/// Header the storefront API reads the admin token from.
pub const TOKEN_HEADER: &str = "token";

/// Message used when the API rejects a call without saying why.
const DEFAULT_REJECTION: &str = "Request was rejected";

/// Longest response body kept in an [`ApiError::Status`] message.
const MAX_ERROR_BODY: usize = 200;

/// Errors that can occur when calling the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, timeout, bad TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The API answered `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("Unexpected API response: {0}")]
    Decode(String),

    /// An endpoint path could not be joined onto the base URL.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Text suitable for an error toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A file received from the browser and forwarded to the API.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Convert into a multipart part, keeping the original name and type.
    fn into_part(self) -> Result<reqwest::multipart::Part, ApiError> {
        let part = reqwest::multipart::Part::bytes(self.bytes).file_name(self.file_name);
        match self.content_type {
            Some(mime) => Ok(part.mime_str(&mime)?),
            None => Ok(part),
        }
    }
}

/// The `{success, message}` part shared by every response.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

/// Storefront REST API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be built.
    pub fn new(config: &StoreApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("atelier-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// API base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve a path relative to the API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the path cannot be joined.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path.trim_start_matches('/'))?)
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.inner.client.get(self.url(path)?))
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.inner.client.post(self.url(path)?))
    }

    /// Check the API for the readiness endpoint: any HTTP answer counts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the API cannot be reached.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.get("api/product/list")?.send().await?;
        Ok(())
    }
}

/// Attach the admin token header.
fn with_token(request: RequestBuilder, token: &SecretString) -> RequestBuilder {
    request.header(TOKEN_HEADER, token.expose_secret())
}

/// Send a request and unwrap the `{success, message, ...}` envelope.
///
/// The remaining fields are decoded into `T`.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let value = send_envelope(request).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request and check the envelope, returning the raw JSON body.
async fn send_envelope(request: RequestBuilder) -> Result<Value, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    let value: Option<Value> = serde_json::from_str(&body).ok();
    let envelope = value
        .as_ref()
        .and_then(|v| Envelope::deserialize(v).ok());

    if !status.is_success() {
        let message = envelope
            .and_then(|e| e.message)
            .unwrap_or_else(|| truncate(body.trim(), MAX_ERROR_BODY));
        return Err(ApiError::Status { status, message });
    }

    if let Some(Envelope {
        success: Some(false),
        message,
    }) = envelope
    {
        return Err(ApiError::Rejected(
            message.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
        ));
    }

    value.ok_or_else(|| ApiError::Decode("response body is not JSON".to_string()))
}

/// Like [`send_envelope`] but tolerates an empty or non-JSON success body.
async fn send_expecting_ok(request: RequestBuilder) -> Result<Option<String>, ApiError> {
    match send_envelope(request).await {
        Ok(value) => Ok(value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)),
        Err(ApiError::Decode(_)) => Ok(None),
        Err(other) => Err(other),
    }
}

/// Decode a record list, dropping records that do not decode so one bad
/// entry never hides the rest. A missing or `null` list is empty.
fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let records = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable record");
                None
            }
        })
        .collect())
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => format!("{}…", text.get(..index).unwrap_or(text)),
        None => text.to_string(),
    }
}
