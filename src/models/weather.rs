//! Request and response models for the weather endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Query parameters shared by the current-weather and forecast endpoints
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct CityQuery {
    /// City name (e.g., "London")
    pub city: String,
}

/// Response model for the current-weather endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct CurrentWeatherResponse {
    pub city: String,
    pub country: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity in percent
    pub humidity: u32,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Cloud cover in percent
    pub clouds: u32,
    /// Condition label (e.g., "Clouds")
    pub weather: String,
    pub description: String,
    pub icon: String,
    /// Observation time, unix seconds
    pub timestamp: i64,
    /// Shift in seconds from UTC of the city
    pub timezone: i64,
    pub sunrise: i64,
    pub sunset: i64,
}

/// One three-hourly forecast point, stamped with its local date and time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct HourlyForecast {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local time of day, `HH:MM`
    pub time: String,
    pub timestamp: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed: f64,
    pub clouds: u32,
    pub weather: String,
    pub description: String,
    pub icon: String,
}

/// Summary of all forecast points falling on one calendar day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct DaySummary {
    pub date: String,
    /// English weekday name (e.g., "Monday")
    pub day_name: String,
    pub avg_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    /// Most frequent condition label of the day
    pub weather: String,
    pub icon: String,
    pub hourly: Vec<HourlyForecast>,
}

/// Response model for the forecast endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ForecastResponse {
    pub city: String,
    pub country: String,
    pub forecast: Vec<DaySummary>,
}
