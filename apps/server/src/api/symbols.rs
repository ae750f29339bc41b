use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ErrorResponse, SymbolsQuery},
};

#[utoipa::path(
    get,
    path = "/api/symbols",
    params(SymbolsQuery),
    responses(
        (status = 200, description = "Symbols listed for the exchange", body = [String]),
        (status = 400, description = "Exchange parameter missing", body = ErrorResponse),
        (status = 500, description = "Symbol lookup failed", body = ErrorResponse)
    )
)]
pub async fn list_symbols(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolsQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let exchange = match query.exchange.as_deref() {
        Some(exchange) if !exchange.is_empty() => exchange,
        _ => {
            return Err(ApiError::BadRequest(
                "Exchange parameter is required".to_string(),
            ))
        }
    };

    let symbols = state
        .symbol_service
        .list_symbols_for_exchange(exchange)
        .await?;
    tracing::info!("Found {} symbols for exchange {}", symbols.len(), exchange);
    Ok(Json(symbols))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/symbols", get(list_symbols))
}
