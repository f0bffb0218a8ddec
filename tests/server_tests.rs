//! HTTP endpoint tests driving the router directly, without a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use motor_health::server::router;
use motor_health::MonitorConfig;

async fn get(uri: &str) -> (StatusCode, String) {
    let app = router(Arc::new(MonitorConfig::default()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn evaluate_uses_defaults_for_missing_parameters() {
    let (status, body) = get("/evaluate").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "normal");
    assert_eq!(json["reasons"].as_array().unwrap().len(), 0);
    assert_eq!(json["outlook"]["kind"], "no_trend");
}

#[tokio::test]
async fn evaluate_reports_danger_and_forecast() {
    let (status, body) = get("/evaluate?motor_temp=95&bearing_temp_rate=2&series=true").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "danger");
    assert_eq!(json["reasons"][0]["quantity"], "motor_temp");
    assert_eq!(json["reasons"][0]["threshold"], 90.0);
    assert_eq!(json["forecasts"][0]["to_danger"]["kind"], "already_breached");
    assert_eq!(json["forecasts"][1]["to_danger"]["hours"], 22.5);
    assert_eq!(json["outlook"]["kind"], "already_in_danger");

    let series = json["series"].as_array().unwrap();
    assert_eq!(series.len(), 3);
    let bearing = series[1]["samples"].as_array().unwrap();
    assert_eq!(bearing[0], serde_json::json!([0.0, 40.0]));
    assert_eq!(bearing.last().unwrap()[0], 48.0);
}

#[tokio::test]
async fn evaluate_rejects_out_of_range_input() {
    let (status, body) = get("/evaluate?current=25").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("current"), "{}", body);
}

#[tokio::test]
async fn evaluate_rejects_unknown_parameter() {
    let (status, _) = get("/evaluate?voltage=380").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_endpoint_encodes_evaluation() {
    let (status, body) = get("/metrics?vibration=3.0&vibration_rate=0.5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("motor_health_status 1"), "{}", body);
    assert!(
        body.contains("motor_health_hours_to_threshold{quantity=\"vibration\",level=\"danger\"} 3"),
        "{}",
        body
    );
    assert!(body.ends_with("# EOF\n"));
}
