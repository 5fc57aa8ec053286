//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used by the users API client

pub mod http;

pub use http::{HttpClient, HttpError, Response};
