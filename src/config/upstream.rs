//! Configuration for the upstream HTTP client
//!
//! Provides environment-based configuration for the client used to reach
//! the geocoding and weather APIs.

use crate::services::upstream_client::{RetryConfig, UpstreamClientConfig};
use std::env;

impl UpstreamClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        let connect_timeout_seconds = env::var("UPSTREAM_CONNECT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout_seconds);

        let enable_detailed_logging = env::var("UPSTREAM_DETAILED_LOGGING")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.enable_detailed_logging);

        Self {
            timeout_seconds,
            connect_timeout_seconds,
            retry: RetryConfig::from_env(),
            enable_detailed_logging,
        }
    }
}

impl RetryConfig {
    /// Load retry configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_attempts = env::var("UPSTREAM_RETRY_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_attempts);

        let initial_delay_ms = env::var("UPSTREAM_RETRY_INITIAL_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.initial_delay_ms);

        let max_delay_ms = env::var("UPSTREAM_RETRY_MAX_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_delay_ms);

        // Comma-separated status codes, e.g. "429,503"
        let retry_on_status = env::var("UPSTREAM_RETRY_ON_STATUS")
            .ok()
            .map(|v| {
                v.split(',')
                    .filter_map(|s| s.trim().parse::<u16>().ok())
                    .collect()
            })
            .unwrap_or(defaults.retry_on_status);

        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
            retry_on_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    fn clear_upstream_env() {
        unsafe {
            env::remove_var("UPSTREAM_TIMEOUT_SECONDS");
            env::remove_var("UPSTREAM_CONNECT_TIMEOUT_SECONDS");
            env::remove_var("UPSTREAM_DETAILED_LOGGING");
            env::remove_var("UPSTREAM_RETRY_MAX_ATTEMPTS");
            env::remove_var("UPSTREAM_RETRY_INITIAL_DELAY_MS");
            env::remove_var("UPSTREAM_RETRY_MAX_DELAY_MS");
            env::remove_var("UPSTREAM_RETRY_ON_STATUS");
        }
    }

    #[test]
    fn test_upstream_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        clear_upstream_env();

        let config = UpstreamClientConfig::from_env();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.connect_timeout_seconds, 3);
        assert_eq!(config.retry.max_attempts, 0);
        assert_eq!(config.retry.retry_on_status, vec![429, 500, 502, 503, 504]);
        assert!(config.enable_detailed_logging);
    }

    #[test]
    fn test_upstream_config_custom_values() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("UPSTREAM_TIMEOUT_SECONDS", "4");
            env::set_var("UPSTREAM_RETRY_MAX_ATTEMPTS", "2");
            env::set_var("UPSTREAM_RETRY_ON_STATUS", "503, 504,bogus");
        }

        let config = UpstreamClientConfig::from_env();
        assert_eq!(config.timeout_seconds, 4);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.retry_on_status, vec![503, 504]);

        clear_upstream_env();
    }
}
