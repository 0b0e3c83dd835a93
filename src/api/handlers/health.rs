//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::HealthResponse;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
