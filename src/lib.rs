//! Weather proxy API
//!
//! An Actix Web service that forwards city weather lookups to an
//! OpenWeatherMap-compatible provider and reshapes the results:
//! - `GET /api/weather/current` flattens the provider's current conditions
//! - `GET /api/weather/forecast` groups three-hourly points into per-day
//!   summaries (average/min/max temperature, most frequent condition)
//!
//! ## Architecture
//!
//! - `models/` - client-facing response types and provider payload records
//! - `handlers/` - HTTP handlers, OpenAPI document and the app factory
//! - `middleware/` - request ids with access logging, request metrics
//! - `services/` - provider client, forecast aggregation, Prometheus metrics
//! - `config/` - environment-driven configuration read once at startup
//! - `logging` - tracing subscriber setup
//! - `errors` - error taxonomy and its HTTP mapping
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::{web, HttpServer};
//! use weather_proxy::{create_app, AppMetrics, MetricsConfig, WeatherConfig, WeatherService};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let service = WeatherService::new(WeatherConfig::new("your-api-key"), None)
//!         .map_err(|e| std::io::Error::other(e.to_string()))?;
//!     let weather = web::Data::new(service);
//!     let metrics = web::Data::new(AppMetrics::new().expect("metrics"));
//!
//!     HttpServer::new(move || create_app(weather.clone(), metrics.clone(), MetricsConfig::default()))
//!         .bind(("127.0.0.1", 8000))?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::{MetricsConfig, ServerConfig, WeatherConfig};
pub use errors::{ConfigError, WeatherError};
pub use handlers::{
    create_app, create_openapi_spec, current_weather, forecast, get_metrics, health, index,
    query_config, version,
};
pub use logging::{LogFormat, LoggingConfig, init_tracing};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware};
pub use models::{
    CityQuery, CurrentWeatherResponse, DaySummary, ErrorResponse, ForecastResponse,
    HealthResponse, HourlyForecast, RootResponse, VersionResponse,
};
pub use services::{
    AppMetrics, ResilientClient, ResilientClientConfig, ResilientClientError,
    ResilientClientMetrics, RetryConfig, WeatherService, aggregate_forecast, group_by_day,
    mode_condition, round_one_decimal, summarize_day,
};
