//! Weather provider configuration.

use crate::errors::ConfigError;
use crate::services::resilient_client::ResilientClientConfig;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Settings for reaching the weather provider
#[derive(Clone, Debug)]
pub struct WeatherConfig {
    /// Provider credential, sent as the `appid` query parameter
    pub api_key: String,
    pub base_url: String,
    pub client: ResilientClientConfig,
}

impl WeatherConfig {
    /// Configuration for the public provider endpoint with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: ResilientClientConfig::default(),
        }
    }

    /// Point the service at another provider root, e.g. a mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `OPENWEATHER_API_KEY` has no default: the service refuses to start
    /// without a credential.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("OPENWEATHER_API_KEY"))?;

        let base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if url::Url::parse(&base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "OPENWEATHER_BASE_URL",
                value: base_url,
            });
        }


        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ResilientClientConfig::from_env(),
        })
    }
}
