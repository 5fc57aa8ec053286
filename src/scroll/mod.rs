//! Load-more-on-scroll mechanism.
//!
//! The list renderer places a one-row sentinel after the last child and
//! reports its [`SentinelGeometry`]. [`InfiniteScroll`] turns transitions of
//! that sentinel into the visible state into "next page" callbacks, never
//! while a load is already in flight.

mod container;
mod observer;

pub use container::{InfiniteScroll, NextPageCallback};
pub use observer::{IntersectionObserver, ObserverOptions, SentinelGeometry};
