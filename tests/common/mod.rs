use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use casting_agency::router::init_router;
use casting_agency::state::AppState;
use casting_auth::testing::test_verifier;
use casting_config::CorsConfig;
use casting_db::MemoryStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Permission sets of the three identity provider roles.
#[allow(dead_code)]
pub mod roles {
    pub const CASTING_ASSISTANT: &[&str] = &["get:actors", "get:movies"];

    pub const CASTING_DIRECTOR: &[&str] = &[
        "get:actors",
        "get:movies",
        "post:actors",
        "delete:actors",
        "patch:actors",
        "patch:movies",
    ];

    pub const EXECUTIVE_PRODUCER: &[&str] = &[
        "get:actors",
        "get:movies",
        "post:actors",
        "delete:actors",
        "patch:actors",
        "patch:movies",
        "post:movies",
        "delete:movies",
    ];
}

pub fn setup_test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        test_verifier(),
        CorsConfig::default(),
    );
    init_router(state)
}

/// Sends one request through a clone of `app` and decodes the JSON body.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Sends a raw body, bypassing JSON encoding.
#[allow(dead_code)]
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[allow(dead_code)]
pub fn assert_error_body(body: &Value, status: StatusCode) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], status.as_u16());
    assert!(body["message"].is_string());
}
