use axum::{response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness check
///
/// # Responses
/// - 200 (OK): The server is running
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn get_health() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}
