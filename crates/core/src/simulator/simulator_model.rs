use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stocksim_market_data::PricePoint;
use thiserror::Error;

/// Input for one "invest on `start_date`, sell on `end_date`" simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub exchange: String,
    pub symbol: String,
    pub start_date: NaiveDate,
    /// Exclusive upper bound of the history window
    pub end_date: NaiveDate,
    pub start_value: Decimal,
}

impl SimulationRequest {
    pub fn new(
        exchange: impl Into<String>,
        symbol: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_value: Decimal,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            symbol: symbol.into(),
            start_date,
            end_date,
            start_value,
        }
    }
}

/// Outcome of a successful simulation.
///
/// `end_value`, `value_change` and `growth_rate` are rounded to two decimals;
/// `growth_rate` is a percentage. `ohlcv_data` is returned as fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub start_value: Decimal,
    pub end_value: Decimal,
    pub growth_rate: Decimal,
    pub value_change: Decimal,
    pub ohlcv_data: Vec<PricePoint>,
}

/// Unrounded growth figures derived from the first and last close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthMetrics {
    /// Fractional growth, `(last_close - first_close) / first_close`
    pub growth_rate: Decimal,
    /// `start_value * (1 + growth_rate)`
    pub end_value: Decimal,
    /// `end_value - start_value`
    pub value_change: Decimal,
}

/// Why growth could not be derived from a price series.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthError {
    #[error("price series is empty")]
    EmptySeries,
    #[error("first closing price is zero")]
    ZeroFirstClose,
    #[error("growth figures exceed the representable range")]
    Overflow,
}

/// Result of checking an (exchange, symbol) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StockValidation {
    Valid,
    Invalid(InvalidReason),
}

impl StockValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, StockValidation::Valid)
    }
}

/// Why an (exchange, symbol) pair was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// The exchange is not in the registry; the provider was not consulted.
    ExchangeNotPermitted,
    /// The provider knows the ticker under a different canonical symbol.
    SymbolMismatch { canonical: String },
    /// The provider lookup failed.
    ProviderError(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::ExchangeNotPermitted => write!(f, "exchange not permitted"),
            InvalidReason::SymbolMismatch { canonical } => {
                write!(f, "provider reports canonical symbol '{}'", canonical)
            }
            InvalidReason::ProviderError(message) => write!(f, "provider error: {}", message),
        }
    }
}
