use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::main_lib::AppState;

#[utoipa::path(
    get,
    path = "/api/exchanges",
    responses((status = 200, description = "Valid exchange codes", body = [String]))
)]
pub async fn list_exchanges(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    tracing::info!("Fetching list of valid exchanges");
    Json(state.simulator.exchanges().list().to_vec())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchanges", get(list_exchanges))
}
