//! Message handling for the App.

use tracing::{error, info};

use crate::api::{ApiError, PageNumber};
use crate::models::UsersResponse;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PageLoaded { page, result } => self.apply_page(page, result),
            AppMessage::NextPageRequested => {
                self.request_next_page();
            }
        }
    }

    /// Apply a finished fetch. Failures are logged and the page is skipped.
    fn apply_page(&mut self, page: PageNumber, result: Result<UsersResponse, ApiError>) {
        match result {
            Ok(response) => {
                info!(
                    %page,
                    count = response.results.len(),
                    total = self.users.len() + response.results.len(),
                    "users page loaded"
                );
                self.users.extend(response.results);
                self.last_info = Some(response.info);
            }
            Err(err) => {
                error!(%page, code = err.error_code(), "{}", err);
            }
        }

        self.loading = false;
        self.sync_scroll();
        self.mark_dirty();
    }
}
