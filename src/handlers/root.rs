//! Root endpoint handler.

use crate::models::RootResponse;
use actix_web::web;
use paperclip::actix::api_v2_operation;

pub const WELCOME_MESSAGE: &str = "Welcome to the weather proxy API";

/// Fixed welcome message, handy as a smoke test for the deployment
#[api_v2_operation(
    summary = "Welcome Endpoint",
    description = "Returns a fixed welcome message.",
    tags("General")
)]
pub async fn index() -> web::Json<RootResponse> {
    web::Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
