//! userfeed - an infinitely scrolling list of user cards in the terminal
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod scroll;
pub mod terminal;
pub mod traits;
pub mod ui;
