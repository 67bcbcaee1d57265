// config.rs
use std::env;
use std::time::Duration;

use crate::errors::{AppError, Result};
use crate::models::user::DisplayUser;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Unset means requests may hang as long as the server keeps the socket open.
    pub request_timeout: Option<Duration>,
    pub log_level: tracing::Level,
    pub display_user: DisplayUser,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::new(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        AppConfig {
            api_base_url: api_base_url.into(),
            request_timeout: None,
            log_level: tracing::Level::INFO,
            display_user: DisplayUser::default(),
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    pub fn from_env_only() -> Result<Self> {
        let defaults = DisplayUser::default();

        let request_timeout = match env::var("API_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::configuration(format!("API_TIMEOUT_SECS must be a number, got '{}'", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse::<tracing::Level>()
            .map_err(|e| AppError::configuration(format!("LOG_LEVEL: {}", e)))?;

        Ok(AppConfig {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout,
            log_level,
            display_user: DisplayUser {
                name: env::var("DISPLAY_USER_NAME").unwrap_or(defaults.name),
                email: env::var("DISPLAY_USER_EMAIL").unwrap_or(defaults.email),
                avatar_url: env::var("DISPLAY_USER_AVATAR").unwrap_or(defaults.avatar_url),
            },
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_display_user(mut self, user: DisplayUser) -> Self {
        self.display_user = user;
        self
    }

    pub fn get_config_info(&self) -> serde_json::Value {
        serde_json::json!({
            "api_base_url": self.api_base_url,
            "request_timeout_secs": self.request_timeout.map(|t| t.as_secs()),
            "log_level": self.log_level.to_string(),
            "display_user": self.display_user.name,
        })
    }
}
