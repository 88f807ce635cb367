//! Configuration types and loading

use serde::{Deserialize, Serialize};

/// Bounds for the user-configurable reports refresh interval
pub const REPORTS_REFRESH_MIN_SECONDS: u64 = 10;
pub const REPORTS_REFRESH_MAX_SECONDS: u64 = 300;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Remote API settings
    pub api: ApiConfig,

    /// Auto-refresh settings
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the PHP API, e.g. `http://localhost/consty/api`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Dashboard auto-refresh period (fixed in the original UI)
    pub dashboard_seconds: u64,
    /// Reports auto-refresh period, clamped to [10, 300]
    pub reports_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost/consty/api".to_string(),
                request_timeout_seconds: 30,
            },
            refresh: RefreshConfig {
                dashboard_seconds: 300,
                reports_seconds: 60,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CONSTY_API_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(timeout) = std::env::var("CONSTY_REQUEST_TIMEOUT") {
            config.api.request_timeout_seconds =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "CONSTY_REQUEST_TIMEOUT".into(),
                    message: format!("not a number: {}", timeout),
                })?;
        }
        if let Ok(seconds) = std::env::var("CONSTY_DASHBOARD_REFRESH") {
            config.refresh.dashboard_seconds =
                seconds.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "CONSTY_DASHBOARD_REFRESH".into(),
                    message: format!("not a number: {}", seconds),
                })?;
        }
        if let Ok(seconds) = std::env::var("CONSTY_REPORTS_REFRESH") {
            let parsed: u64 = seconds.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CONSTY_REPORTS_REFRESH".into(),
                message: format!("not a number: {}", seconds),
            })?;
            config.refresh.reports_seconds = clamp_reports_interval(parsed);
        }

        Ok(config)
    }
}

/// Clamp a requested reports refresh interval into the allowed range.
pub fn clamp_reports_interval(seconds: u64) -> u64 {
    seconds.clamp(REPORTS_REFRESH_MIN_SECONDS, REPORTS_REFRESH_MAX_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost/consty/api");
        assert_eq!(config.refresh.dashboard_seconds, 300);
    }

    #[test]
    fn test_clamp_reports_interval() {
        assert_eq!(clamp_reports_interval(5), 10);
        assert_eq!(clamp_reports_interval(60), 60);
        assert_eq!(clamp_reports_interval(999), 300);
    }
}
