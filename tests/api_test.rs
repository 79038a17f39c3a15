//! End-to-end tests for the calculator HTTP surface.
//!
//! These build the real axum `Router` and drive it with
//! `tower::ServiceExt::oneshot`, no listener involved.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use quickcalc::config::CalcConfig;

fn app() -> Router {
    quickcalc::app(&CalcConfig::default())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_calculate(body: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, body_json(response).await)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn calculate_addition() {
    let (status, json) =
        post_calculate(r#"{"left": 5, "right": 7, "operator": "+"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["result"], json!(12.0));
    assert_eq!(json["left"], json!(5.0));
    assert_eq!(json["right"], json!(7.0));
    assert_eq!(json["operator"], "+");
    assert!(json["evaluated_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn calculate_accepts_numeric_strings() {
    let (status, json) =
        post_calculate(r#"{"left": "5", "right": "7", "operator": "+"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], json!(12.0));
}

#[tokio::test]
async fn calculate_unicode_division() {
    let (status, json) =
        post_calculate(r#"{"left": 9, "right": 2, "operator": "÷"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], json!(4.5));
    assert_eq!(json["operator"], "÷");
}

#[tokio::test]
async fn calculate_invalid_operator_is_400() {
    let (status, json) =
        post_calculate(r#"{"left": 1, "right": 1, "operator": "invalid"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("invalid"));
}

#[tokio::test]
async fn calculate_division_by_zero_is_400() {
    let (status, json) =
        post_calculate(r#"{"left": 1, "right": 0, "operator": "/"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Cannot divide by zero.");
}

#[tokio::test]
async fn calculate_missing_field_is_400() {
    let (status, json) = post_calculate(r#"{"left": 1, "operator": "+"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn calculate_garbage_body_is_400() {
    for body in ["", "not json at all", "[1, 2, 3]"] {
        let (status, json) = post_calculate(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body={body:?}");
        assert_eq!(json["status"], "error");
    }
}

#[tokio::test]
async fn time_endpoint_returns_utc_iso() {
    let (status, json) = get("/api/time").await;

    assert_eq!(status, StatusCode::OK);
    let iso = json["iso"].as_str().unwrap();
    assert!(iso.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(iso).is_ok());
}

#[tokio::test]
async fn healthz_reports_ok_with_timestamp() {
    let (status, json) = get("/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    let time = json["time"].as_str().unwrap();
    assert!(time.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
}

#[tokio::test]
async fn root_serves_calculator_page() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("QuickCalc"));
    assert!(html.contains("api/calculate") || html.contains("app.js"));
}
