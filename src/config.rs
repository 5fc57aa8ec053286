//! Runtime configuration.
//!
//! Layered as defaults, then environment variables, then command-line flags.
//!
//! ```ignore
//! use userfeed::config::AppConfig;
//!
//! let config = AppConfig::from_env()?
//!     .with_observer(ObserverOptions::new().with_root_margin(4));
//! ```

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;
use crate::cli::RunOptions;
use crate::scroll::ObserverOptions;

pub const ENV_API_URL: &str = "USERFEED_API_URL";
pub const ENV_ROOT_MARGIN: &str = "USERFEED_ROOT_MARGIN";
pub const ENV_THRESHOLD: &str = "USERFEED_THRESHOLD";
pub const ENV_TIMEOUT_SECS: &str = "USERFEED_TIMEOUT_SECS";
pub const ENV_LOG: &str = "USERFEED_LOG";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A setting that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Users endpoint
    pub api_url: Url,
    /// Sentinel visibility settings
    pub observer: ObserverOptions,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Log filter directive; `RUST_LOG` is consulted when unset
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_BASE_URL).expect("default API URL is valid"),
            observer: ObserverOptions::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: Url) -> Self {
        self.api_url = url;
        self
    }

    pub fn with_observer(mut self, observer: ObserverOptions) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults overridden by `USERFEED_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = parse_url(&url)?;
        }
        if let Some(margin) = lookup(ENV_ROOT_MARGIN) {
            let margin = parse_value::<u16>(ENV_ROOT_MARGIN, &margin)?;
            config.observer = config.observer.with_root_margin(margin);
        }
        if let Some(threshold) = lookup(ENV_THRESHOLD) {
            let threshold = parse_threshold(ENV_THRESHOLD, &threshold)?;
            config.observer = config.observer.with_threshold(threshold);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_value::<u64>(ENV_TIMEOUT_SECS, &secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }
        config.log_filter = lookup(ENV_LOG).filter(|s| !s.trim().is_empty());

        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn apply_options(mut self, options: &RunOptions) -> Result<Self, ConfigError> {
        if let Some(url) = &options.api_url {
            self.api_url = parse_url(url)?;
        }
        if let Some(margin) = options.root_margin {
            self.observer = self.observer.with_root_margin(margin);
        }
        if let Some(threshold) = options.threshold {
            self.observer = self.observer.with_threshold(threshold);
        }
        Ok(self)
    }
}

fn parse_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    Ok(url)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Thresholds must be finite and within `[0, 1]`.
pub(crate) fn parse_threshold(key: &str, value: &str) -> Result<f32, ConfigError> {
    let threshold: f32 = parse_value(key, value)?;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(threshold)
}
