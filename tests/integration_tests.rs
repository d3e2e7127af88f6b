//! Integration tests for the fully assembled application: fixed endpoints,
//! operational endpoints and the middleware stack.

mod common;

use actix_web::{http::StatusCode, test};
use weather_proxy::{MetricsConfig, create_app, handlers::WELCOME_MESSAGE};

/// The provider is never contacted by these tests
const UNREACHABLE_PROVIDER: &str = "http://127.0.0.1:1";

#[actix_web::test]
async fn test_root_returns_welcome_message() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "message": WELCOME_MESSAGE }));
}

/// Health check through the complete middleware stack
#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("Content-Type header should be present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {content_type}"
    );

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string(), "commit should be a string");
    assert!(json["build_time"].is_string(), "build_time should be a string");
}

#[actix_web::test]
async fn test_metrics_endpoint_reports_traffic() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("route=\"/health\""));
    assert!(body.contains("app_uptime_seconds"));
    assert!(!body.contains("route=\"/api/metrics\""));
}

#[actix_web::test]
async fn test_metrics_endpoint_disabled() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig { enabled: false },
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_openapi_document_lists_weather_routes() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    let paths = json["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/api/weather/current"));
    assert!(paths.contains_key("/api/weather/forecast"));
    assert!(paths.contains_key("/health"));
}

#[actix_web::test]
async fn test_request_id_is_generated_and_echoed() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .unwrap();
    assert!(!generated.is_empty());

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("x-request-id", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = test::init_service(create_app(
        common::test_service(UNREACHABLE_PROVIDER),
        common::test_metrics(),
        MetricsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
