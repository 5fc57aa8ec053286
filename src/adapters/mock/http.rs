//! Mock HTTP client for testing.
//!
//! Responses are queued per call, so a test can script "page 1 succeeds, page
//! 2 fails" and later inspect every URL that was requested.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Queued responses are consumed in order; once the queue is empty the
/// default response is used.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.push_response(MockResponse::Success(Response::new(200, "{}")));
/// client.get("https://example.com/api/?page=1").await?;
/// assert_eq!(client.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client with no responses configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn push_response(&self, response: MockResponse) {
        self.queue.lock().unwrap().push_back(response);
    }

    /// Set the response used once the queue is drained.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn next_response(&self) -> Option<MockResponse> {
        if let Some(response) = self.queue.lock().unwrap().pop_front() {
            return Some(response);
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.next_response() {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
