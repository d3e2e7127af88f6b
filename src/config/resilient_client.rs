//! Environment loading for the outbound HTTP client configuration.

use crate::services::resilient_client::{ResilientClientConfig, RetryConfig};
use std::env;

impl ResilientClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_seconds = env::var("RESILIENT_CLIENT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        let connect_timeout_seconds = env::var("RESILIENT_CLIENT_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout_seconds);

        let enable_detailed_logging = env::var("RESILIENT_CLIENT_DETAILED_LOGGING")
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

        let max_attempts = env::var("RESILIENT_CLIENT_RETRY_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_attempts);

        let initial_delay_ms = env::var("RESILIENT_CLIENT_RETRY_INITIAL_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.initial_delay_ms);

        let max_delay_ms = env::var("RESILIENT_CLIENT_RETRY_MAX_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_delay_ms);

        // Comma-separated list, e.g. "500,502,503"
        let retry_on_status = env::var("RESILIENT_CLIENT_RETRY_ON_STATUS")
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
