mod common;

use actix_web::{http::StatusCode, test};
use comfort_weather::{AppMetrics, MetricsConfig, create_app};
use serde_json::{Value, json};

/// Integration test for the health check endpoint
///
/// Uses the full app factory so the middleware stack and OpenAPI wrapper
/// are exercised exactly as in production.
#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("Content-Type header should be present")
        .to_str()
        .unwrap();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {content_type}"
    );

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json, json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string());
    assert!(json["build_time"].is_string());
}

#[actix_web::test]
async fn test_index_page_serves_lookup_form() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains(r#"<form id="lookup">"#));
    assert!(html.contains("/get_weather"));
    assert!(html.contains(r#"href="/history""#));
}

#[actix_web::test]
async fn test_security_headers_and_request_id() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("x-request-id", "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let headers = resp.headers();

    assert_eq!(headers.get("x-request-id").unwrap(), "abc-123");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
    assert!(headers.contains_key("content-security-policy"));
    assert!(!headers.contains_key("strict-transport-security"));
}

#[actix_web::test]
async fn test_request_id_is_generated_when_absent() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;

    let id = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[actix_web::test]
async fn test_metrics_endpoint_reports_requests() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains(r#"route="/api/health""#));
    assert!(body.contains("app_uptime_seconds"));
    assert!(!body.contains(r#"route="/api/metrics""#));
}

#[actix_web::test]
async fn test_metrics_endpoint_can_be_disabled() {
    let mut state = common::bare_state();
    state.metrics_config = MetricsConfig { enabled: false };
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_openapi_spec_lists_routes() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let spec: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(spec["info"]["title"], "Comfort Weather");
    let paths = spec["paths"].as_object().unwrap();
    for path in ["/get_weather", "/api/weather", "/history", "/api/history", "/api/health"] {
        assert!(paths.contains_key(path), "spec is missing {path}");
    }
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = test::init_service(create_app(common::bare_state())).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_metrics_registries_are_independent() {
    let a = AppMetrics::new().unwrap();
    let b = AppMetrics::new().unwrap();
    a.record_lookup("success");

    assert!(a.render().unwrap().contains(r#"location_lookups_total{outcome="success"} 1"#));
    assert!(!b.render().unwrap().contains(r#"outcome="success""#));
}
