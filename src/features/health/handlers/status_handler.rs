use axum::{http::StatusCode, Json};
use chrono::Utc;

use crate::features::health::dtos::StatusResponseDto;

/// API status and server time
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API is running", body = StatusResponseDto)
    ),
    tag = "health"
)]
pub async fn status() -> Json<StatusResponseDto> {
    Json(StatusResponseDto {
        message: "Geographic API is running".to_string(),
        timestamp: Utc::now(),
    })
}

/// Simple health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = "health"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
