//! Weather endpoint handlers.

use crate::{
    errors::WeatherError,
    models::{CityQuery, CurrentWeatherResponse, ErrorResponse, ForecastResponse},
    services::{AppMetrics, WeatherService},
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, error::InternalError, web};
use paperclip::actix::api_v2_operation;

/// Query extractor settings for the weather routes.
///
/// A missing or malformed `city` parameter is rejected with 422 and an
/// [`ErrorResponse`] body before any handler runs.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        tracing::debug!(path = %req.path(), error = %err, "Rejected weather query");
        let body = ErrorResponse {
            detail: format!("Invalid query parameters: {err}"),
        };
        InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body)).into()
    })
}

/// Current weather endpoint
#[api_v2_operation(
    summary = "Current Weather Endpoint",
    description = "Returns the provider's current conditions for a city, flattened into a single record. Temperatures are in degrees Celsius.",
    tags("Weather")
)]
pub async fn current_weather(
    req: HttpRequest,
    query: web::Query<CityQuery>,
) -> Result<web::Json<CurrentWeatherResponse>, Error> {
    let city = validate_city(&query.city)?;
    let service = weather_service(&req)?;

    let result = service.current_weather(city).await;
    record_lookup(&req, "current", &result);

    Ok(web::Json(result?))
}

/// Forecast endpoint
#[api_v2_operation(
    summary = "Forecast Endpoint",
    description = "Returns the provider's three-hourly forecast for a city, grouped by calendar day in the server's time zone. Each day carries average, minimum and maximum temperature, the most frequent condition and all underlying points.",
    tags("Weather")
)]
pub async fn forecast(
    req: HttpRequest,
    query: web::Query<CityQuery>,
) -> Result<web::Json<ForecastResponse>, Error> {
    let city = validate_city(&query.city)?;
    let service = weather_service(&req)?;

    let result = service.forecast(city).await;
    record_lookup(&req, "forecast", &result);

    Ok(web::Json(result?))
}

fn validate_city(city: &str) -> Result<&str, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherError::InvalidCity);
    }
    Ok(city)
}

fn weather_service(req: &HttpRequest) -> Result<&web::Data<WeatherService>, WeatherError> {
    req.app_data::<web::Data<WeatherService>>().ok_or_else(|| {
        tracing::error!("WeatherService missing from app data");
        WeatherError::Internal("weather service not configured".to_string())
    })
}

fn record_lookup<T>(req: &HttpRequest, endpoint: &str, result: &Result<T, WeatherError>) {
    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        let outcome = match result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        metrics.record_lookup(endpoint, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city_trims() {
        assert_eq!(validate_city("  Paris ").unwrap(), "Paris");
    }

    #[test]
    fn test_validate_city_rejects_blank() {
        assert!(matches!(validate_city(""), Err(WeatherError::InvalidCity)));
        assert!(matches!(validate_city("   "), Err(WeatherError::InvalidCity)));
    }
}
