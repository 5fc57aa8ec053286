//! Tracing setup.
//!
//! Stdout belongs to the TUI, so log output goes to
//! `~/.userfeed/logs/userfeed.log`. The filter comes from `USERFEED_LOG`,
//! then `RUST_LOG`, then [`DEFAULT_FILTER`].

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn,userfeed=info";

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".userfeed").join("logs").join("userfeed.log"))
}

/// Build the filter from an explicit directive, or the environment.
///
/// An unparsable directive falls back to [`DEFAULT_FILTER`].
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the global subscriber writing to `path`.
pub fn init_at(path: &Path, directive: Option<&str>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(fmt_layer)
        .try_init()
        .map_err(io::Error::other)
}

/// Install logging at the default location.
///
/// Returns the log path on success. Any failure leaves logging disabled;
/// the app runs the same either way.
pub fn init(directive: Option<&str>) -> Option<PathBuf> {
    let path = log_path()?;
    match init_at(&path, directive) {
        Ok(()) => Some(path),
        Err(_) => None,
    }
}
