//! HTTP-level tests for the comparator service.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! listener or network is needed. A fixed seed keeps responses reproducible.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use comparator::create_router;
use race_sim::config::SimConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_router(SimConfig::seeded(12345))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, body)
}

fn post_simulate(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/simulate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check_sets_headers() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, headers, _) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(app(), request).await;

    assert_eq!(headers["x-request-id"], "trace-me");
}

#[tokio::test]
async fn test_events_catalog() {
    let request = Request::builder().uri("/events").body(Body::empty()).unwrap();
    let (status, _, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_age"], 10);
    assert_eq!(body["max_age"], 50);

    let types = body["event_types"].as_array().unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0]["event_type"], "Track");
    assert_eq!(types[0]["distances"].as_array().unwrap().len(), 6);
    assert_eq!(types[0]["default_distance"], "1600m");
    assert_eq!(types[1]["event_type"], "XC");
    assert_eq!(
        types[1]["distances"],
        json!(["1 Mile", "2 Miles", "3 Miles"])
    );
    assert_eq!(types[1]["default_distance"], "3 Miles");
}

#[tokio::test]
async fn test_simulate_with_time() {
    let (status, _, body) = send(
        app(),
        post_simulate(json!({
            "age": 25,
            "sex": "Male",
            "event_type": "Track",
            "distance": "1600m",
            "time": "05:00",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body["title"],
        "Performance Distribution: 1600m (Male, Age 25)"
    );

    let simulation = &body["simulation"];
    assert_eq!(simulation["baseline_adjusted"], 223.13);
    assert_eq!(simulation["requested_samples"], 5000);
    let floor = simulation["baseline_adjusted"].as_f64().unwrap();
    let samples = simulation["samples"].as_array().unwrap();
    assert_eq!(simulation["sample_count"], samples.len());
    assert!(samples.iter().all(|s| s.as_f64().unwrap() > floor));

    assert_eq!(body["histogram"]["counts"].as_array().unwrap().len(), 40);

    let comparison = &body["comparison"];
    assert_eq!(comparison["label"], "05:00");
    assert_eq!(comparison["comparison_seconds"], 300.0);
    let percentile = comparison["percentile"].as_f64().unwrap();
    assert!(percentile > 80.0 && percentile <= 100.0, "{percentile}");
}

#[tokio::test]
async fn test_simulate_without_time_and_custom_size() {
    let (status, _, body) = send(
        app(),
        post_simulate(json!({
            "age": 45,
            "sex": "Female",
            "event_type": "Track",
            "distance": "100m",
            "sample_size": 200,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body["comparison"].is_null());
    let simulation = &body["simulation"];
    assert_eq!(simulation["requested_samples"], 200);
    assert!(simulation["sample_count"].as_u64().unwrap() <= 200);
    let adjusted = simulation["baseline_adjusted"].as_f64().unwrap();
    assert!((adjusted - 12.850_25).abs() < 1e-9);
}

#[tokio::test]
async fn test_age_out_of_range() {
    let (status, _, body) = send(
        app(),
        post_simulate(json!({
            "age": 60,
            "sex": "Male",
            "event_type": "Track",
            "distance": "400m",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Age must be between 10 and 50");
}

#[tokio::test]
async fn test_malformed_time() {
    let (status, _, body) = send(
        app(),
        post_simulate(json!({
            "age": 30,
            "sex": "Female",
            "event_type": "XC",
            "distance": "2 Miles",
            "time": "12-30",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Format must be MM:SS (e.g. 04:30)");
}

#[tokio::test]
async fn test_distance_from_other_event_type() {
    let (status, _, body) = send(
        app(),
        post_simulate(json!({
            "age": 30,
            "sex": "Male",
            "event_type": "Track",
            "distance": "3 Miles",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("3 Miles"));
}

#[tokio::test]
async fn test_unknown_distance_rejected() {
    let (status, headers, body) = send(
        app(),
        post_simulate(json!({
            "age": 30,
            "sex": "Male",
            "event_type": "Track",
            "distance": "5000m",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Unknown event label: 5000m"), "{error}");
}

#[tokio::test]
async fn test_undecodable_fields_return_json_errors() {
    for payload in [
        json!({"age": -3, "sex": "Male", "event_type": "Track", "distance": "100m"}),
        json!({"age": 30, "sex": "Other", "event_type": "Track", "distance": "100m"}),
        json!({"age": 30, "sex": "Male", "event_type": "Road", "distance": "100m"}),
    ] {
        let (status, _, body) = send(app(), post_simulate(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert!(body["error"].is_string(), "{payload} -> {body}");
    }
}

#[tokio::test]
async fn test_missing_content_type_returns_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/simulate")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let (status, _, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}
