//! Client for the randomuser.me users endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

use super::error::ApiError;
use super::page::PageNumber;
use crate::adapters::ReqwestHttpClient;
use crate::models::UsersResponse;
use crate::traits::HttpClient;

/// Default users endpoint.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

/// Users requested per page.
pub const RESULTS_PER_PAGE: u32 = 20;

/// Fields selected from each user record.
pub const INCLUDED_FIELDS: &str = "login,email,name,picture";

/// Build the request URL for `page` against `base_url`.
///
/// Existing query parameters on the base URL are kept; `page`, `results`
/// and `inc` are appended.
pub fn build_users_url(base_url: &Url, page: PageNumber) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair("page", &page.to_string())
        .append_pair("results", &RESULTS_PER_PAGE.to_string())
        .append_pair("inc", INCLUDED_FIELDS);
    url
}

/// Check the decoded body has the page envelope shape.
///
/// Only the presence of `info` and `results` is checked; field types inside
/// them are left to deserialization.
fn validate_envelope(body: &serde_json::Value) -> Result<(), ApiError> {
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidResponse("body is not a JSON object".to_string()))?;

    for field in ["info", "results"] {
        if !object.contains_key(field) {
            return Err(ApiError::InvalidResponse(format!("missing `{}`", field)));
        }
    }
    Ok(())
}

/// Fetches pages of users through an injected [`HttpClient`].
#[derive(Clone)]
pub struct UsersClient {
    http: Arc<dyn HttpClient>,
    base_url: Url,
}

impl UsersClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Production client: reqwest transport with a request timeout.
    pub fn with_reqwest(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let http = ReqwestHttpClient::with_timeout(timeout)?;
        Ok(Self::new(Arc::new(http), base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch and validate one page of users.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidArgument`] if `page` is not a positive integer;
    ///   no request is issued.
    /// - [`ApiError::Network`] on transport failure or a non-2xx status; the
    ///   body is not parsed.
    /// - [`ApiError::InvalidResponse`] if the body is not JSON or lacks
    ///   `info` / `results`.
    pub async fn fetch_users<P>(&self, page: P) -> Result<UsersResponse, ApiError>
    where
        P: TryInto<PageNumber>,
        P::Error: Into<ApiError>,
    {
        let page = match page.try_into() {
            Ok(page) => page,
            Err(err) => {
                let err: ApiError = err.into();
                warn!(code = err.error_code(), "rejected page number: {}", err);
                return Err(err);
            }
        };

        let url = build_users_url(&self.base_url, page);
        debug!(%page, %url, "fetching users page");

        let response = self.http.get(url.as_str()).await.map_err(|err| {
            warn!(%page, "users request failed: {}", err);
            ApiError::from(err)
        })?;

        if !response.is_success() {
            warn!(%page, status = response.status, "users request returned error status");
            return Err(ApiError::Network {
                status: Some(response.status),
                message: format!("HTTP {}", response.status),
            });
        }

        let body: serde_json::Value = response.json().map_err(|err| {
            warn!(%page, "users response is not JSON: {}", err);
            ApiError::InvalidResponse(err.to_string())
        })?;

        validate_envelope(&body).inspect_err(|err| {
            warn!(%page, "users response has wrong shape: {}", err);
        })?;

        let users: UsersResponse = serde_json::from_value(body)
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;

        debug!(%page, count = users.results.len(), "users page fetched");
        Ok(users)
    }
}

impl std::fmt::Debug for UsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
