//! Application state and logic for the TUI.
//!
//! [`App`] owns the page cursor, the accumulated users and the loading flag.
//! Fetches run on the tokio runtime and report back through [`AppMessage`];
//! the scroll container asks for more through the same channel.

mod handlers;
mod messages;
mod navigation;
mod scroll_state;

pub use messages::AppMessage;
pub use scroll_state::ScrollState;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::{ApiError, PageNumber, UsersClient};
use crate::config::AppConfig;
use crate::models::{PageInfo, User};
use crate::scroll::{InfiniteScroll, ObserverOptions, SentinelGeometry};

/// Main application state
pub struct App {
    /// Users loaded so far, in arrival order
    pub users: Vec<User>,
    /// Page cursor: the page most recently requested
    pub page: PageNumber,
    /// A fetch is in flight
    pub loading: bool,
    /// `info` block of the last page that loaded
    pub last_info: Option<PageInfo>,
    /// Sentinel observer wiring
    pub scroll: InfiniteScroll,
    /// Scroll position of the list
    pub scroll_state: ScrollState,
    /// Sentinel position from the last render
    pub sentinel: Option<SentinelGeometry>,
    /// Should the app quit?
    pub should_quit: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Animation tick counter
    pub tick_count: u64,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to fetch tasks and the scroll callback
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    client: UsersClient,
}

impl App {
    /// Create an App talking to the configured endpoint over HTTP.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = UsersClient::with_reqwest(config.api_url.clone(), config.request_timeout)?;
        Ok(Self::with_client(client, config.observer))
    }

    /// Create an App with a custom client
    pub fn with_client(client: UsersClient, options: ObserverOptions) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let tx = message_tx.clone();
        let scroll = InfiniteScroll::new(move || {
            if tx.send(AppMessage::NextPageRequested).is_err() {
                debug!("app gone, next page request dropped");
            }
        })
        .with_options(options);

        Self {
            users: Vec::new(),
            page: PageNumber::FIRST,
            loading: false,
            last_info: None,
            scroll,
            scroll_state: ScrollState::new(),
            sentinel: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client,
        }
    }

    /// Start loading the first page.
    pub fn mount(&mut self) {
        info!(base_url = %self.client.base_url(), "mounting user list");
        self.fetch_current_page();
    }

    /// Spawn the fetch for the current cursor.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch_current_page(&mut self) {
        self.loading = true;
        self.sync_scroll();
        self.mark_dirty();

        let page = self.page;
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        debug!(%page, "spawning page fetch");

        tokio::spawn(async move {
            let result = client.fetch_users(page).await;
            if tx.send(AppMessage::PageLoaded { page, result }).is_err() {
                debug!(%page, "app gone, page result dropped");
            }
        });
    }

    /// Advance the cursor and fetch. Ignored while a fetch is in flight.
    ///
    /// Returns `true` if a fetch was started.
    pub fn request_next_page(&mut self) -> bool {
        if self.loading {
            debug!(page = %self.page, "next page requested while loading, ignored");
            return false;
        }
        self.page = self.page.next();
        self.fetch_current_page();
        true
    }

    /// Push the list length and loading flag into the scroll container.
    pub fn sync_scroll(&mut self) {
        self.scroll.sync(self.users.len(), self.loading);
    }

    /// Feed the last rendered sentinel position to the observer.
    ///
    /// Returns `true` if the next-page callback fired.
    pub fn observe_sentinel(&mut self) -> bool {
        match self.sentinel {
            Some(geometry) => self.scroll.observe(geometry),
            None => false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. The spinner only moves while loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.loading {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("users", &self.users.len())
            .field("loading", &self.loading)
            .field("scroll", &self.scroll)
            .field("scroll_state", &self.scroll_state)
            .finish_non_exhaustive()
    }
}
