//! Errors raised by the users API client.

use thiserror::Error;

use crate::traits::HttpError;

/// Every way a page fetch can fail.
///
/// None of these carry retry metadata: the client never retries and the
/// caller decides what a failure means.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The page number was not a positive integer. Raised before any I/O.
    #[error("Failed to fetch users: Invalid page number ({0})")]
    InvalidArgument(String),

    /// The request did not complete with a 2xx status. `status` is `None`
    /// when the transport failed before a status line arrived.
    #[error("Failed to fetch users: Network error ({message})")]
    Network { status: Option<u16>, message: String },

    /// The body was not JSON, or lacked `info` / `results`.
    #[error("Failed to fetch users: Invalid response ({0})")]
    InvalidResponse(String),
}

impl ApiError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "E_API_ARG",
            ApiError::Network { .. } => "E_API_NET",
            ApiError::InvalidResponse(_) => "E_API_INVALID",
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// HTTP status that caused the failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Network {
            status: None,
            message: err.to_string(),
        }
    }
}

impl From<std::convert::Infallible> for ApiError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}
