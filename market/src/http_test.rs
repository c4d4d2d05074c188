use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};

use super::*;
use crate::test_helpers::{client_for, client_with_scheme, dead_base_url, signed_in, spawn_stub};

async fn echo_auth(headers: HeaderMap) -> Json<Value> {
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({ "authorization": auth }))
}

async fn reject() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": "X", "code": "BAD_INPUT" })))
}

async fn not_json() -> &'static str {
    "plain text"
}

fn router() -> Router {
    Router::new()
        .route("/api/echo/", get(echo_auth))
        .route("/api/reject/", get(reject))
        .route("/api/text/", get(not_json))
}

#[test]
fn endpoint_joins_base_and_path() {
    let client = client_for("http://api.test/", Session::in_memory());
    assert_eq!(client.endpoint("/api/login/"), "http://api.test/api/login/");
    assert_eq!(client.endpoint("api/login/"), "http://api.test/api/login/");
}

#[tokio::test]
async fn authorized_request_carries_token_scheme() {
    let base = spawn_stub(router()).await;
    let client = client_for(&base, signed_in("abc"));
    let body: Value = client.send_json(client.authorized(Method::GET, "/api/echo/")).await.unwrap();
    assert_eq!(body["authorization"], "Token abc");
}

#[tokio::test]
async fn bearer_scheme_is_configurable() {
    let base = spawn_stub(router()).await;
    let client = client_with_scheme(&base, signed_in("abc"), AuthScheme::Bearer);
    let body: Value = client.send_json(client.authorized(Method::GET, "/api/echo/")).await.unwrap();
    assert_eq!(body["authorization"], "Bearer abc");
}

#[tokio::test]
async fn signed_out_request_has_no_header() {
    let base = spawn_stub(router()).await;
    let client = client_for(&base, Session::in_memory());
    let body: Value = client.send_json(client.authorized(Method::GET, "/api/echo/")).await.unwrap();
    assert!(body["authorization"].is_null());
}

#[tokio::test]
async fn anonymous_request_never_sends_token() {
    let base = spawn_stub(router()).await;
    let client = client_for(&base, signed_in("abc"));
    let body: Value = client.send_json(client.anonymous(Method::GET, "/api/echo/")).await.unwrap();
    assert!(body["authorization"].is_null());
}

#[tokio::test]
async fn rejection_keeps_server_body() {
    let base = spawn_stub(router()).await;
    let client = client_for(&base, Session::in_memory());
    let err = client.send_json::<Value>(client.authorized(Method::GET, "/api/reject/")).await.unwrap_err();
    match err {
        ApiError::Rejected { status, body: Some(body) } => {
            assert_eq!(status, 400);
            assert_eq!(body.message(), Some("X"));
            assert_eq!(body.code.as_deref(), Some("BAD_INPUT"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_route_is_rejected_without_body() {
    let base = spawn_stub(router()).await;
    let client = client_for(&base, Session::in_memory());
    let err = client.send_empty(client.authorized(Method::GET, "/api/nope/")).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn undecodable_body_is_decode_error() {
    let base = spawn_stub(router()).await;
    let client = client_for(&base, Session::in_memory());
    let err = client.send_json::<Value>(client.authorized(Method::GET, "/api/text/")).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn dead_server_is_no_response() {
    let base = dead_base_url().await;
    let client = client_for(&base, Session::in_memory());
    let err = client.send_empty(client.authorized(Method::GET, "/api/echo/")).await.unwrap_err();
    assert!(matches!(err, ApiError::NoResponse(_)), "got {err:?}");
}
