//! Login flow tests
//!
//! The seed migration provides `testuser` / `testpass123` owning two data
//! items, so every fresh service starts with a known account.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use palisade::requests::v1::auth::LoginRequest;
use palisade::responses::v1::auth::Authenticated;
use serde_json::Value;

#[actix_web::test]
async fn login_with_seeded_credentials_returns_token() {
    let (service, _db) = palisade::service!();

    let request = LoginRequest {
        username: "testuser".to_string(),
        password: "testpass123".to_string(),
    };

    let req = TestRequest::post()
        .uri("/auth/login")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Authenticated = read_body_json(resp).await;
    assert!(!body.access_token.is_empty());
    assert_eq!(body.token_type, "Bearer");
    assert_eq!(body.user_id, 1);
    assert_eq!(body.username, "testuser");
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (service, _db) = palisade::service!();

    let request = LoginRequest {
        username: "testuser".to_string(),
        password: "not-the-password".to_string(),
    };

    let req = TestRequest::post()
        .uri("/auth/login")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let (service, _db) = palisade::service!();

    let unknown = LoginRequest {
        username: "no_such_user".to_string(),
        password: "whatever".to_string(),
    };
    let wrong_password = LoginRequest {
        username: "testuser".to_string(),
        password: "whatever".to_string(),
    };

    let mut bodies = Vec::new();
    for request in [unknown, wrong_password] {
        let req = TestRequest::post()
            .uri("/auth/login")
            .set_json(&request)
            .to_request();

        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = read_body_json(resp).await;
        bodies.push(body);
    }

    // Same status, same body: the response never reveals whether the
    // username exists.
    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn login_with_missing_fields_is_bad_request() {
    let (service, _db) = palisade::service!();

    let payloads = [
        serde_json::json!({}),
        serde_json::json!({ "username": "testuser" }),
        serde_json::json!({ "password": "testpass123" }),
        serde_json::json!({ "username": "", "password": "" }),
        serde_json::json!({ "username": "testuser", "password": "" }),
    ];

    for payload in payloads {
        let req = TestRequest::post()
            .uri("/auth/login")
            .set_json(&payload)
            .to_request();

        let resp = call_service(&service, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "payload {payload} should be rejected as missing fields"
        );

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Username and password are required");
    }
}

#[actix_web::test]
async fn login_token_grants_access_to_protected_route() {
    let (service, _db) = palisade::service!();

    let request = LoginRequest {
        username: "testuser".to_string(),
        password: "testpass123".to_string(),
    };

    let req = TestRequest::post()
        .uri("/auth/login")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    let body: Authenticated = read_body_json(resp).await;

    let req = TestRequest::get()
        .uri("/api/data")
        .insert_header(("Authorization", format!("Bearer {}", body.access_token)))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn created_user_can_login() {
    let (service, db) = palisade::service!();
    let hasher = palisade::testing::setup::password_hasher().unwrap();

    let user = palisade::testing::setup::create_test_user(&db, &hasher)
        .await
        .unwrap();

    let request = LoginRequest {
        username: user.username.clone(),
        password: "password".to_string(),
    };

    let req = TestRequest::post()
        .uri("/auth/login")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Authenticated = read_body_json(resp).await;
    assert_eq!(body.user_id, user.id);
    assert_eq!(body.username, user.username);
}
