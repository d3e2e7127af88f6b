//! Weather service: fetches current conditions and forecasts from the
//! provider and reshapes them into the API's response models.

use crate::{
    config::WeatherConfig,
    errors::WeatherError,
    models::{
        CurrentWeatherResponse, ForecastResponse, ProviderCurrentWeather, ProviderErrorBody,
        ProviderForecast,
    },
    services::{
        forecast::aggregate_forecast,
        resilient_client::{ResilientClient, ResilientClientError, ResilientClientMetrics},
    },
};
use chrono::Local;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Responses are always requested in metric units (Celsius, m/s)
const PROVIDER_UNITS: &str = "metric";

/// Client for the weather provider.
///
/// Holds only configuration and a pooled HTTP client, so one instance is
/// shared by all workers.
pub struct WeatherService {
    client: ResilientClient,
    config: WeatherConfig,
}

impl WeatherService {
    pub fn new(
        config: WeatherConfig,
        metrics: Option<ResilientClientMetrics>,
    ) -> Result<Self, WeatherError> {
        let client = ResilientClient::new(config.client.clone(), metrics)
            .map_err(|e| WeatherError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Current conditions for `city`
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError> {
        let data: ProviderCurrentWeather = self.fetch("weather", city).await?;
        current_from_provider(data)
    }

    /// Multi-day forecast for `city`, summarised per day in the server's
    /// local time zone
    pub async fn forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let data: ProviderForecast = self.fetch("forecast", city).await?;
        let forecast = aggregate_forecast(&data.list, &Local)?;

        tracing::debug!(
            city = %data.city.name,
            points = data.list.len(),
            days = forecast.len(),
            "Aggregated forecast"
        );

        Ok(ForecastResponse {
            city: data.city.name,
            country: data.city.country,
            forecast,
        })
    }

    /// Issue one provider request and decode a successful payload
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        let query = [
            ("q", city),
            ("appid", self.config.api_key.as_str()),
            ("units", PROVIDER_UNITS),
        ];

        let response = self.client.get(&url, &query).await.map_err(|e| {
            tracing::error!(endpoint, city, error = %e, "Weather provider request failed");
            match &e {
                ResilientClientError::RetryableStatus(status) => WeatherError::Upstream {
                    status: *status,
                    message: e.user_message(),
                },
                _ => WeatherError::Internal(e.user_message()),
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound {
                city: city.to_string(),
            });
        }
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(endpoint, "Weather provider rejected the API key");
            return Err(WeatherError::Unauthorized);
        }
        if !status.is_success() {
            let body: ProviderErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .message
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(endpoint, city, status = status.as_u16(), %message, "Weather provider returned an error");
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(endpoint, city, error = %e, "Failed to decode weather provider response");
            WeatherError::Internal(format!("unexpected weather provider response: {e}"))
        })
    }
}

/// Flatten the provider's current-weather payload
fn current_from_provider(data: ProviderCurrentWeather) -> Result<CurrentWeatherResponse, WeatherError> {
    let condition = data.weather.into_iter().next().ok_or_else(|| {
        WeatherError::Internal("weather provider response has no weather condition".to_string())
    })?;

    Ok(CurrentWeatherResponse {
        city: data.name,
        country: data.sys.country,
        temperature: data.main.temp,
        feels_like: data.main.feels_like,
        humidity: data.main.humidity,
        pressure: data.main.pressure,
        wind_speed: data.wind.speed,
        clouds: data.clouds.all,
        weather: condition.main,
        description: condition.description,
        icon: condition.icon,
        timestamp: data.dt,
        timezone: data.timezone,
        sunrise: data.sys.sunrise,
        sunset: data.sys.sunset,
    })
}
