//! Shared fixtures for integration tests: provider payloads and service
//! construction against a mock provider.
#![allow(dead_code)]

use actix_web::web;
use chrono::{Local, TimeZone};
use serde_json::{Value, json};
use weather_proxy::{AppMetrics, ResilientClientConfig, WeatherConfig, WeatherService};

pub const API_KEY: &str = "test-key";

/// Provider configuration pointing at `base_url` with a short timeout
pub fn test_config(base_url: &str) -> WeatherConfig {
    let mut config = WeatherConfig::new(API_KEY).with_base_url(base_url);
    config.client = ResilientClientConfig {
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..ResilientClientConfig::default()
    };
    config
}

pub fn test_service(base_url: &str) -> web::Data<WeatherService> {
    web::Data::new(WeatherService::new(test_config(base_url), None).expect("weather service"))
}

pub fn test_metrics() -> web::Data<AppMetrics> {
    web::Data::new(AppMetrics::new().expect("metrics"))
}

pub fn london_current() -> Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "base": "stations",
        "main": {"temp": 12.8, "feels_like": 12.1, "temp_min": 11.9, "temp_max": 13.7, "pressure": 1009, "humidity": 84},
        "visibility": 10000,
        "wind": {"speed": 5.14, "deg": 230},
        "clouds": {"all": 75},
        "dt": 1749564000,
        "sys": {"type": 2, "id": 2075535, "country": "GB", "sunrise": 1749527038, "sunset": 1749586949},
        "timezone": 3600,
        "id": 2643743,
        "name": "London",
        "cod": 200
    })
}

pub fn forecast_entry(dt: i64, temp: f64, condition: &str, icon: &str) -> Value {
    json!({
        "dt": dt,
        "main": {"temp": temp, "feels_like": temp - 0.5, "temp_min": temp, "temp_max": temp, "pressure": 1015, "humidity": 70},
        "weather": [{"id": 800, "main": condition, "description": condition.to_lowercase(), "icon": icon}],
        "clouds": {"all": 10},
        "wind": {"speed": 2.4, "deg": 180},
        "visibility": 10000,
        "pop": 0,
        "dt_txt": "ignored"
    })
}

/// Unix timestamp of a local wall-clock time in the server's time zone
pub fn local_timestamp(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .earliest()
        .expect("valid local time")
        .timestamp()
}

/// Eight three-hourly points covering one local calendar day
pub fn single_day_forecast(city: &str, country: &str) -> Value {
    let start = local_timestamp(2025, 6, 11, 0);
    let list: Vec<Value> = (0..8)
        .map(|i| forecast_entry(start + i * 3 * 3600, 14.0 + i as f64, "Clouds", "04d"))
        .collect();

    json!({
        "cod": "200",
        "message": 0,
        "cnt": list.len(),
        "list": list,
        "city": {"id": 1, "name": city, "country": country, "timezone": 0, "sunrise": 0, "sunset": 0}
    })
}
