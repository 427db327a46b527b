use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Quote fetch failed: {0}")]
    FetchFailure(String),

    #[error("Malformed quote response: {0}")]
    MalformedResponse(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Display device unreachable: {0}")]
    DeviceUnreachable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::FetchFailure(ref msg) => (
                StatusCode::BAD_GATEWAY,
                "FETCH_FAILURE",
                msg.clone(),
            ),
            AppError::MalformedResponse(ref msg) => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_RESPONSE",
                msg.clone(),
            ),
            AppError::BadRequest(ref msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                msg.clone(),
            ),
            AppError::DeviceUnreachable(ref msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "DEVICE_UNREACHABLE",
                msg.clone(),
            ),
            AppError::Internal(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_maps_to_bad_gateway() {
        let response = AppError::FetchFailure("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("invalid symbol".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn device_unreachable_maps_to_503() {
        let response = AppError::DeviceUnreachable("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
