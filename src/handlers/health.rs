use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "backend",
    }))
}

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Portfolio Backend",
        "status": "ok",
    }))
}
