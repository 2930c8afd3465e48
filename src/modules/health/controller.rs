use anyhow::anyhow;
use axum::{Json, http::Uri};

use casting_core::AppError;
use casting_models::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback for unknown routes.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(anyhow!("No route for {}", uri.path()))
}
