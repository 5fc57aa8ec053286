//! HTTP client trait abstraction.
//!
//! The users API only ever issues GET requests, so the trait is kept to that
//! single operation. Production code plugs in the reqwest adapter, tests plug
//! in the recording mock.

use async_trait::async_trait;
use bytes::Bytes;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failures. A non-2xx status is *not* an `HttpError`; it is
/// returned as a [`Response`] and judged by the caller.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Request timeout
    Timeout(String),
    /// Invalid URL
    InvalidUrl(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for HTTP GET operations.
///
/// # Example
///
/// ```ignore
/// use userfeed::traits::{HttpClient, HttpError};
///
/// async fn fetch<C: HttpClient>(client: &C) -> Result<u16, HttpError> {
///     Ok(client.get("https://randomuser.me/api/?page=1").await?.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request against a fully-built URL.
    async fn get(&self, url: &str) -> Result<Response, HttpError>;
}
