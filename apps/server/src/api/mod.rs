use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        ErrorResponse, HealthStatus, OhlcvBar, SimulateResponse, SimulationRequestBody,
        SimulationResultBody,
    },
};

pub mod exchanges;
pub mod health;
pub mod simulate;
pub mod symbols;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Simulator API",
        description = "API documentation for Stock Investment Simulator"
    ),
    paths(
        health::health,
        exchanges::list_exchanges,
        symbols::list_symbols,
        simulate::simulate
    ),
    components(schemas(
        HealthStatus,
        ErrorResponse,
        SimulationRequestBody,
        SimulationResultBody,
        OhlcvBar,
        SimulateResponse
    )),
    tags((name = "stocksim"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(exchanges::router())
        .merge(symbols::router())
        .merge(simulate::router());

    Router::new()
        .nest("/api", api)
        .route("/swagger.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
