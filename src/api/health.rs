use axum::{extract::State, Json};
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub device: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let device_status = if state.device.is_some() {
        "configured".to_string()
    } else {
        "not configured".to_string()
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        device: device_status,
    })
}
