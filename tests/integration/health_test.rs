//! Health check endpoint tests

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::Value;

#[actix_web::test]
async fn health_returns_healthy_without_auth() {
    let (service, _db) = palisade::service!();

    let req = TestRequest::get().uri("/health").to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn health_ignores_authorization_header() {
    let (service, _db) = palisade::service!();

    // Even a garbage token changes nothing; the route has no auth.
    let req = TestRequest::get()
        .uri("/health")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn health_content_type_is_json() {
    let (service, _db) = palisade::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    assert!(content_type.contains("application/json"));
}
