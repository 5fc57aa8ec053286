//! The infinite scroll container.
//!
//! [`InfiniteScroll`] sits between the list renderer and whoever owns the
//! data. The renderer reports where the sentinel ended up; the container
//! decides whether that means "load the next page" and calls back.

use std::sync::Arc;

use tracing::{debug, trace};

use super::observer::{IntersectionObserver, ObserverOptions, SentinelGeometry};

/// Callback invoked when the list's end becomes visible.
pub type NextPageCallback = Arc<dyn Fn() + Send + Sync>;

/// Tracks the sentinel observer for a list of children.
///
/// The observer is re-established whenever the child count, the options or
/// the callback change, and when a load finishes. With no children no
/// observer exists, so nothing can fire until the first item arrives.
pub struct InfiniteScroll {
    options: ObserverOptions,
    on_next_page: NextPageCallback,
    observer: Option<IntersectionObserver>,
    child_count: usize,
    loading: bool,
    generation: u64,
}

impl InfiniteScroll {
    pub fn new(on_next_page: impl Fn() + Send + Sync + 'static) -> Self {
        Self::with_callback(Arc::new(on_next_page))
    }

    pub fn with_callback(on_next_page: NextPageCallback) -> Self {
        Self {
            options: ObserverOptions::default(),
            on_next_page,
            observer: None,
            child_count: 0,
            loading: false,
            generation: 0,
        }
    }

    pub fn with_options(mut self, options: ObserverOptions) -> Self {
        self.set_options(options);
        self
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ObserverOptions) {
        if options != self.options {
            self.options = options;
            self.reinstall();
        }
    }

    /// Replace the callback. A different callback gets a fresh observer.
    pub fn set_on_next_page(&mut self, on_next_page: NextPageCallback) {
        if !Arc::ptr_eq(&self.on_next_page, &on_next_page) {
            self.on_next_page = on_next_page;
            self.reinstall();
        }
    }

    /// Update the children count and loading flag from the owner's state.
    ///
    /// The observer is rebuilt when the count changes and when a load
    /// finishes, so a sentinel still on screen after a load that added
    /// nothing is reported again.
    pub fn sync(&mut self, child_count: usize, loading: bool) {
        let load_finished = self.loading && !loading;
        self.loading = loading;
        if child_count != self.child_count || load_finished {
            self.child_count = child_count;
            self.reinstall();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Whether an observer is currently watching the sentinel.
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Feed the sentinel position from the latest render.
    ///
    /// Returns `true` if the callback fired.
    pub fn observe(&mut self, geometry: SentinelGeometry) -> bool {
        let Some(observer) = self.observer.as_mut() else {
            return false;
        };

        match observer.observe(geometry) {
            Some(true) if !self.loading => {
                debug!(
                    generation = observer.generation(),
                    children = self.child_count,
                    "sentinel visible, requesting next page"
                );
                (self.on_next_page)();
                true
            }
            Some(true) => {
                trace!("sentinel visible while loading, ignored");
                false
            }
            _ => false,
        }
    }

    fn reinstall(&mut self) {
        if let Some(stale) = self.observer.take() {
            trace!(generation = stale.generation(), "sentinel observer torn down");
        }

        if self.child_count == 0 {
            return;
        }

        self.generation += 1;
        self.observer = Some(IntersectionObserver::new(self.options, self.generation));
        trace!(generation = self.generation, "sentinel observer installed");
    }
}

impl std::fmt::Debug for InfiniteScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfiniteScroll")
            .field("options", &self.options)
            .field("observer", &self.observer)
            .field("child_count", &self.child_count)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
