//! Configuration from real environment variables.
//!
//! These tests mutate the process environment, so they run serially.

use serial_test::serial;
use std::time::Duration;
use userfeed::cli::{parse_args, CliCommand};
use userfeed::config::{
    AppConfig, ConfigError, ENV_API_URL, ENV_LOG, ENV_ROOT_MARGIN, ENV_THRESHOLD,
    ENV_TIMEOUT_SECS,
};

const ALL_VARS: [&str; 5] = [ENV_API_URL, ENV_ROOT_MARGIN, ENV_THRESHOLD, ENV_TIMEOUT_SECS, ENV_LOG];

fn clear_env() {
    for key in ALL_VARS {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.api_url.as_str(), "https://randomuser.me/api/");
    assert_eq!(config.observer.root_margin, 0);
    assert_eq!(config.observer.threshold, 1.0);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert!(config.log_filter.is_none());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var(ENV_API_URL, "http://127.0.0.1:8080/users/");
    std::env::set_var(ENV_ROOT_MARGIN, "3");
    std::env::set_var(ENV_TIMEOUT_SECS, "7");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_url.as_str(), "http://127.0.0.1:8080/users/");
    assert_eq!(config.observer.root_margin, 3);
    assert_eq!(config.request_timeout, Duration::from_secs(7));
}

#[test]
#[serial]
fn test_invalid_env_value_is_reported() {
    clear_env();
    std::env::set_var(ENV_THRESHOLD, "lots");

    let result = AppConfig::from_env();
    clear_env();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidValue {
            key: ENV_THRESHOLD.to_string(),
            value: "lots".to_string(),
        }
    );
}

#[test]
#[serial]
fn test_flags_override_env() {
    clear_env();
    std::env::set_var(ENV_ROOT_MARGIN, "3");
    std::env::set_var(ENV_THRESHOLD, "0.2");

    let args = ["userfeed", "--root-margin", "10", "--api-url=http://localhost/api/"];
    let options = match parse_args(args.iter().map(|s| s.to_string())).unwrap() {
        CliCommand::RunTui(options) => options,
        other => panic!("expected RunTui, got {:?}", other),
    };
    let config = AppConfig::from_env().unwrap().apply_options(&options).unwrap();
    clear_env();

    assert_eq!(config.observer.root_margin, 10);
    assert_eq!(config.observer.threshold, 0.2);
    assert_eq!(config.api_url.as_str(), "http://localhost/api/");
}
