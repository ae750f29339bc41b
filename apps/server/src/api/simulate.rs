use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use stocksim_core::simulator::SimulationRequest;

use crate::{
    error::{ApiError, SimulationFailure},
    main_lib::AppState,
    models::{SimulateResponse, SimulationRequestBody},
};

#[utoipa::path(
    post,
    path = "/api/simulate",
    request_body = SimulationRequestBody,
    responses(
        (status = 200, description = "Simulation result", body = SimulateResponse),
        (status = 400, description = "Invalid input or no data for the range", body = SimulateResponse),
        (status = 500, description = "Unexpected failure", body = SimulateResponse)
    )
)]
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SimulationRequestBody>, JsonRejection>,
) -> Result<Json<SimulateResponse>, SimulationFailure> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    tracing::info!(
        "Simulate endpoint called for {}:{} from {} to {} with {}",
        body.exchange,
        body.symbol,
        body.start_date,
        body.end_date,
        body.start_value
    );

    let request = SimulationRequest::from(body);
    let result = state.simulator.simulate_investment(&request).await?;
    tracing::info!(
        "Simulation successful: {} data points, growth {}%",
        result.ohlcv_data.len(),
        result.growth_rate
    );
    Ok(Json(SimulateResponse::success(result.into())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/simulate", post(simulate))
}
