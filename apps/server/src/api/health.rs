use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::{main_lib::AppState, models::HealthStatus};

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Backend is healthy", body = HealthStatus))
)]
pub async fn health() -> Json<HealthStatus> {
    tracing::info!("Health check endpoint was called");
    Json(HealthStatus::up())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
