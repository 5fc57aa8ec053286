//! Messages delivered to the app from background tasks and callbacks.

use crate::api::{ApiError, PageNumber};
use crate::models::UsersResponse;

/// Events processed by [`App::handle_message`](super::App::handle_message).
#[derive(Debug)]
pub enum AppMessage {
    /// A page fetch finished, successfully or not
    PageLoaded {
        page: PageNumber,
        result: Result<UsersResponse, ApiError>,
    },
    /// The list's sentinel became visible
    NextPageRequested,
}
