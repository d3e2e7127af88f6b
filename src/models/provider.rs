//! Payload records of the OpenWeatherMap-compatible provider.
//!
//! Only the fields the service maps are declared; unknown fields are ignored.
//! A missing or mistyped field fails decoding, which surfaces as an internal
//! error rather than a partially filled response.

use serde::Deserialize;

/// `GET /weather` payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCurrentWeather {
    pub name: String,
    pub dt: i64,
    pub timezone: i64,
    pub main: ProviderMain,
    pub weather: Vec<ProviderCondition>,
    pub wind: ProviderWind,
    pub clouds: ProviderClouds,
    pub sys: ProviderSys,
}

/// `GET /forecast` payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderForecast {
    pub list: Vec<ForecastEntry>,
    pub city: ProviderCity,
}

/// One three-hour step of the forecast list
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ProviderMain,
    pub weather: Vec<ProviderCondition>,
    pub wind: ProviderWind,
    pub clouds: ProviderClouds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderWind {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderClouds {
    pub all: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCity {
    pub name: String,
    pub country: String,
}

/// Error body the provider sends with non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
