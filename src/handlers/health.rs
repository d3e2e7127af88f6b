//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Used by liveness and readiness probes. It never calls the weather
/// provider, so a provider outage does not take the service out of rotation.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the API in JSON format.",
    tags("Health")
)]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
