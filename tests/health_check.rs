mod common;

use chrono::{DateTime, Utc};
use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "backend");
}

#[tokio::test]
async fn health_timestamp_is_utc_rfc3339() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let timestamp = body["timestamp"].as_str().expect("timestamp missing");

    let parsed: DateTime<Utc> = timestamp
        .parse()
        .expect("timestamp is not RFC3339");
    let age = (Utc::now() - parsed).num_seconds().abs();
    assert!(age < 5, "timestamp too far from now: {}s", age);
}

#[tokio::test]
async fn root_returns_greeting() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}
