mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use casting_auth::testing::{
    ROGUE_PRIVATE_KEY_PEM, TEST_AUDIENCE, TEST_ISSUER, TEST_KID, claims_with_permissions,
    sign_token, sign_with,
};
use common::{send, setup_test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/actors", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": 401,
            "message": "Authorization header is expected."
        })
    );
}

#[tokio::test]
async fn test_wrong_scheme_is_rejected() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/actors", Some("Token abc"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Authorization header must start with \"Bearer\"."
    );
}

#[tokio::test]
async fn test_bearer_without_token_is_rejected() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/movies", Some("Bearer"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token not found.");
}

#[tokio::test]
async fn test_too_many_header_parts_is_rejected() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/movies", Some("Bearer a b"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authorization header must be bearer token.");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/movies", Some("Bearer not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], 401);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = setup_test_app();
    let mut claims = claims_with_permissions(&["get:actors"]);
    claims["exp"] = json!(chrono::Utc::now().timestamp() - 3600);
    let token = format!("Bearer {}", sign_token(&claims));

    let (status, body) = send(&app, "GET", "/actors", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token expired.");
}

#[tokio::test]
async fn test_wrong_audience_is_rejected() {
    let app = setup_test_app();
    let mut claims = claims_with_permissions(&["get:actors"]);
    claims["aud"] = json!("someone-else");
    let token = format!("Bearer {}", sign_token(&claims));

    let (status, body) = send(&app, "GET", "/actors", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Incorrect claims. Please, check the audience and issuer."
    );
}

#[tokio::test]
async fn test_foreign_signature_is_rejected() {
    let app = setup_test_app();
    let claims = claims_with_permissions(&["get:actors"]);
    let token = format!(
        "Bearer {}",
        sign_with(ROGUE_PRIVATE_KEY_PEM, TEST_KID, &claims)
    );

    let (status, body) = send(&app, "GET", "/actors", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token signature is invalid.");
}

#[tokio::test]
async fn test_unknown_key_id_is_rejected() {
    let app = setup_test_app();
    let claims = claims_with_permissions(&["get:actors"]);
    let token = format!(
        "Bearer {}",
        sign_with(ROGUE_PRIVATE_KEY_PEM, "rotated-away", &claims)
    );

    let (status, body) = send(&app, "GET", "/actors", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unable to find the appropriate key.");
}

#[tokio::test]
async fn test_missing_permissions_claim_is_bad_request() {
    let app = setup_test_app();
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "iss": TEST_ISSUER,
        "sub": "auth0|no-permissions",
        "aud": TEST_AUDIENCE,
        "iat": now,
        "exp": now + 3600,
    });
    let token = format!("Bearer {}", sign_token(&claims));

    let (status, body) = send(&app, "GET", "/actors", Some(&token), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": 400,
            "message": "Permissions not included in JWT."
        })
    );
}

#[tokio::test]
async fn test_auth_checked_before_path() {
    let app = setup_test_app();

    let (status, _) = send(&app, "DELETE", "/actors/abc", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "status": "ok"}));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/directors", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
}

#[tokio::test]
async fn test_responses_carry_cors_and_request_id_headers() {
    let app = setup_test_app();
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://casting.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type,Authorization,true"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET,PUT,POST,PATCH,DELETE,OPTIONS"
    );
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_error_responses_carry_cors_headers() {
    let app = setup_test_app();
    let request = Request::builder()
        .uri("/actors")
        .header(header::ORIGIN, "https://casting.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test]
async fn test_preflight_is_answered_without_token() {
    let app = setup_test_app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/actors")
        .header(header::ORIGIN, "https://casting.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET,PUT,POST,PATCH,DELETE,OPTIONS"
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/actors/{id}"].is_object());
}
