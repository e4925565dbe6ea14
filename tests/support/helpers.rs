// tests/support/helpers.rs
use super::routes::failure_routes;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use calculator_api::presentation::http::{error::ErrorResponse, routes::build_router};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn make_test_router() -> axum::Router {
    build_router(&["http://localhost:3000".to_string()]).merge(failure_routes())
}

pub async fn send(req: Request<Body>) -> axum::response::Response {
    make_test_router().oneshot(req).await.expect("router is infallible")
}

pub async fn get(uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(req).await
}

pub async fn post_json(uri: &str, body: &Value) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(req).await
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response carries an `ErrorResponse` with the expected status
/// and message, and hand the parsed body back for further checks.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_message: &str,
) -> ErrorResponse {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = body_json(resp).await;
    let keys: Vec<&str> = json
        .as_object()
        .expect("error body is an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 3, "unexpected error body fields: {keys:?}");
    assert!(json["errors"].is_array(), "errors must always be an array");

    let parsed: ErrorResponse = serde_json::from_value(json).expect("ErrorResponse shape");
    assert_eq!(parsed.message, expected_message);
    parsed
}
