use std::env;
use std::time::Duration;

use serial_test::serial;

use sportlink_client::config::{AppConfig, DEFAULT_API_BASE_URL};
use sportlink_client::errors::AppError;

const VARS: [&str; 6] = [
    "API_BASE_URL",
    "API_TIMEOUT_SECS",
    "LOG_LEVEL",
    "DISPLAY_USER_NAME",
    "DISPLAY_USER_EMAIL",
    "DISPLAY_USER_AVATAR",
];

/// Runs `f` with the given variables set and every other config variable
/// removed, restoring the previous environment afterwards.
fn with_env<F: FnOnce()>(values: &[(&str, &str)], f: F) {
    let saved: Vec<(&str, Option<String>)> = VARS.iter().map(|key| (*key, env::var(key).ok())).collect();
    for key in VARS {
        env::remove_var(key);
    }
    for (key, value) in values {
        env::set_var(key, value);
    }

    f();

    for (key, value) in saved {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}

#[test]
#[serial]
fn defaults_without_environment() {
    with_env(&[], || {
        let config = AppConfig::from_env_only().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.display_user.name, "Jorge");
        assert_eq!(config.display_user.email, "jorge@sportlink.com");
    });
}

#[test]
#[serial]
fn custom_values() {
    with_env(
        &[
            ("API_BASE_URL", "https://sportlink.example/api"),
            ("API_TIMEOUT_SECS", "15"),
            ("LOG_LEVEL", "debug"),
            ("DISPLAY_USER_NAME", "Ana Gómez"),
        ],
        || {
            let config = AppConfig::from_env_only().unwrap();
            assert_eq!(config.api_base_url, "https://sportlink.example/api");
            assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
            assert_eq!(config.log_level, tracing::Level::DEBUG);
            assert_eq!(config.display_user.initials(), "AG");
            assert_eq!(config.get_config_info()["request_timeout_secs"], 15);
        },
    );
}

#[test]
#[serial]
fn invalid_values_are_configuration_errors() {
    with_env(&[("API_TIMEOUT_SECS", "soon")], || {
        let err = AppConfig::from_env_only().unwrap_err();
        assert!(matches!(err, AppError::ConfigurationError(_)));
    });

    with_env(&[("LOG_LEVEL", "loud")], || {
        assert!(AppConfig::from_env_only().is_err());
    });
}
