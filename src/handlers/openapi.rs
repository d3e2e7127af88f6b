//! OpenAPI specification generation and app factory.

use crate::{
    config::MetricsConfig,
    handlers::{current_weather, forecast, get_metrics, health, index, query_config, version},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, WeatherService},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Proxy API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Proxies city weather lookups to an OpenWeatherMap-compatible provider and reshapes the results.\n\n\
                ## Endpoints\n\
                - `GET /api/weather/current?city=<name>`: current conditions as a flat record\n\
                - `GET /api/weather/forecast?city=<name>`: three-hourly forecast grouped into per-day summaries\n\
                \n\
                ## Errors\n\
                Every failure carries a JSON body `{\"detail\": \"...\"}`.\n\
                - `401`: the provider rejected the configured API key\n\
                - `404`: the provider does not know the city\n\
                - `422`: the `city` parameter is missing or blank\n\
                - `500`: unexpected failure, including unreachable provider and malformed provider payloads\n\
                - `502`: the provider answered with any other error status\n\
                \n\
                ## Forecast aggregation\n\
                Points are grouped by calendar date in the server's time zone, in the order the provider returns them. \
                Temperatures are rounded to one decimal place (halves away from zero). \
                The day's condition is the most frequent one, ties going to the condition seen first."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the fully configured application
///
/// The weather service and metrics are built once by the caller and shared
/// across workers; this factory only wires middleware, data and routes. Used
/// by `main` and by the integration tests.
pub fn create_app(
    weather: web::Data<WeatherService>,
    metrics: web::Data<AppMetrics>,
    metrics_config: MetricsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(query_config())
        .app_data(weather)
        .app_data(metrics)
        .app_data(web::Data::new(metrics_config))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/api/weather/current").route(web::get().to(current_weather)))
        .service(web::resource("/api/weather/forecast").route(web::get().to(forecast)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
