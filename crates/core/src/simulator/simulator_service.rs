use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use stocksim_market_data::{MarketDataError, MarketDataProvider, PricePoint};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, INVALID_STOCK_MESSAGE, NO_HISTORY_MESSAGE};
use crate::errors::{Error, Result};
use crate::events::{SimulationEvent, SimulationEventSink};
use crate::exchanges::ExchangeRegistry;

use super::simulator_model::{
    GrowthError, GrowthMetrics, InvalidReason, SimulationRequest, SimulationResult,
    StockValidation,
};
use super::simulator_traits::InvestmentSimulatorTrait;

/// Runs buy-and-hold simulations against a market data provider.
///
/// Holds no mutable state: every call performs one ticker lookup and one
/// history fetch, with no caching or retries.
pub struct InvestmentSimulator {
    exchanges: ExchangeRegistry,
    provider: Arc<dyn MarketDataProvider>,
    event_sink: Arc<dyn SimulationEventSink>,
}

impl InvestmentSimulator {
    pub fn new(
        exchanges: ExchangeRegistry,
        provider: Arc<dyn MarketDataProvider>,
        event_sink: Arc<dyn SimulationEventSink>,
    ) -> Self {
        Self {
            exchanges,
            provider,
            event_sink,
        }
    }

    fn reject(&self, request: &SimulationRequest, reason: &str) -> Error {
        self.event_sink.emit(SimulationEvent::validation_failed(
            &request.exchange,
            &request.symbol,
            reason,
        ));
        Error::validation(reason)
    }

    /// Fetch history, folding "no data" answers into an empty series.
    async fn fetch_history(&self, request: &SimulationRequest) -> Result<Vec<PricePoint>> {
        match self
            .provider
            .get_history(&request.symbol, request.start_date, request.end_date)
            .await
        {
            Ok(mut points) => {
                points.sort_by_key(|p| p.timestamp);
                Ok(points)
            }
            Err(e) if e.is_missing_data() => {
                debug!("No history for {}: {}", request.symbol, e);
                Ok(Vec::new())
            }
            Err(e) => {
                self.event_sink.emit(SimulationEvent::provider_failed(
                    "history",
                    &request.symbol,
                    e.to_string(),
                ));
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl InvestmentSimulatorTrait for InvestmentSimulator {
    fn exchanges(&self) -> &ExchangeRegistry {
        &self.exchanges
    }

    async fn check_stock(&self, exchange: &str, symbol: &str) -> StockValidation {
        if !self.exchanges.is_valid(exchange) {
            return StockValidation::Invalid(InvalidReason::ExchangeNotPermitted);
        }

        match self.provider.get_ticker_info(symbol).await {
            Ok(info) if info.symbol == symbol => StockValidation::Valid,
            Ok(info) => StockValidation::Invalid(InvalidReason::SymbolMismatch {
                canonical: info.symbol,
            }),
            Err(e) => {
                self.event_sink.emit(SimulationEvent::provider_failed(
                    "ticker_info",
                    symbol,
                    e.to_string(),
                ));
                StockValidation::Invalid(InvalidReason::ProviderError(e.to_string()))
            }
        }
    }

    async fn simulate_investment(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        if request.start_value <= Decimal::ZERO {
            return Err(self.reject(request, "Start value must be greater than zero"));
        }
        if request.start_date >= request.end_date {
            return Err(self.reject(request, "Start date must be before end date"));
        }

        if let StockValidation::Invalid(reason) =
            self.check_stock(&request.exchange, &request.symbol).await
        {
            debug!(
                "Stock check failed for {}:{}: {}",
                request.exchange, request.symbol, reason
            );
            return Err(self.reject(request, INVALID_STOCK_MESSAGE));
        }

        let ohlcv_data = self.fetch_history(request).await?;
        if ohlcv_data.is_empty() {
            return Err(self.reject(request, NO_HISTORY_MESSAGE));
        }

        let metrics = compute_growth(request.start_value, &ohlcv_data)
            .map_err(|e| growth_failure(&request.symbol, e))?;

        let growth_rate = metrics
            .growth_rate
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| growth_failure(&request.symbol, GrowthError::Overflow))?
            .round_dp(DISPLAY_DECIMAL_PRECISION);

        self.event_sink.emit(SimulationEvent::simulation_completed(
            &request.exchange,
            &request.symbol,
            ohlcv_data.len(),
            growth_rate,
        ));

        Ok(SimulationResult {
            start_value: request.start_value,
            end_value: metrics.end_value.round_dp(DISPLAY_DECIMAL_PRECISION),
            growth_rate,
            value_change: metrics.value_change.round_dp(DISPLAY_DECIMAL_PRECISION),
            ohlcv_data,
        })
    }
}

/// Bad provider data is a market data failure; overflow is unexpected.
fn growth_failure(symbol: &str, err: GrowthError) -> Error {
    match err {
        GrowthError::Overflow => {
            Error::Unexpected(format!("Cannot compute growth for {}: {}", symbol, err))
        }
        GrowthError::EmptySeries | GrowthError::ZeroFirstClose => {
            Error::MarketData(MarketDataError::ValidationFailed {
                message: format!("Cannot compute growth for {}: {}", symbol, err),
            })
        }
    }
}

/// Growth of `start_value` between the first and last close of `series`.
pub fn compute_growth(
    start_value: Decimal,
    series: &[PricePoint],
) -> std::result::Result<GrowthMetrics, GrowthError> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first.close, last.close),
        _ => return Err(GrowthError::EmptySeries),
    };
    if first.is_zero() {
        return Err(GrowthError::ZeroFirstClose);
    }

    let growth_rate = last
        .checked_sub(first)
        .and_then(|delta| delta.checked_div(first))
        .ok_or(GrowthError::Overflow)?;
    let end_value = Decimal::ONE
        .checked_add(growth_rate)
        .and_then(|factor| start_value.checked_mul(factor))
        .ok_or(GrowthError::Overflow)?;
    let value_change = end_value
        .checked_sub(start_value)
        .ok_or(GrowthError::Overflow)?;
    Ok(GrowthMetrics {
        growth_rate,
        end_value,
        value_change,
    })
}
