use actix_web::{HttpServer, web};
use std::io;
use weather_proxy::{
    AppMetrics, LoggingConfig, MetricsConfig, ResilientClientMetrics, ServerConfig,
    WeatherConfig, WeatherService, create_app, init_tracing,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let logging = LoggingConfig::from_env();
    if let Err(e) = init_tracing(&logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let server = ServerConfig::from_env();
    let metrics_config = MetricsConfig::from_env();
    let weather_config = WeatherConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid weather provider configuration");
        io::Error::other(e.to_string())
    })?;

    let metrics = AppMetrics::new().map_err(|e| io::Error::other(e.to_string()))?;
    let client_metrics = ResilientClientMetrics::new(&metrics.registry)
        .map_err(|e| io::Error::other(e.to_string()))?;

    tracing::info!(
        base_url = %weather_config.base_url,
        timeout_seconds = weather_config.client.timeout_seconds,
        "Weather provider configured"
    );
    let service = WeatherService::new(weather_config, Some(client_metrics))
        .map_err(|e| io::Error::other(e.to_string()))?;

    let weather = web::Data::new(service);
    let metrics = web::Data::new(metrics);

    tracing::info!(host = %server.host, port = server.port, "Starting HTTP server");

    HttpServer::new(move || create_app(weather.clone(), metrics.clone(), metrics_config.clone()))
        .bind((server.host.as_str(), server.port))?
        .run()
        .await
}
