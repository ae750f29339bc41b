use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stocksim_core::constants::DISPLAY_DECIMAL_PRECISION;
use stocksim_core::simulator::{SimulationRequest, SimulationResult};
use stocksim_market_data::PricePoint;
use utoipa::{IntoParams, ToSchema};

const BAR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct HealthStatus {
    #[schema(example = "UP")]
    pub status: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct SymbolsQuery {
    /// Exchange code, e.g. `NASDAQ`
    pub exchange: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SimulationRequestBody {
    #[schema(example = "NASDAQ")]
    pub exchange: String,
    #[schema(example = "AAPL")]
    pub symbol: String,
    #[schema(example = "2023-01-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2023-09-01")]
    pub end_date: NaiveDate,
    #[schema(example = 1000)]
    pub start_value: Decimal,
}

impl From<SimulationRequestBody> for SimulationRequest {
    fn from(body: SimulationRequestBody) -> Self {
        SimulationRequest::new(
            body.exchange,
            body.symbol,
            body.start_date,
            body.end_date,
            body.start_value,
        )
    }
}

/// One daily bar as presented to API clients.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OhlcvBar {
    #[schema(example = "2023-01-03 05:00:00")]
    pub date: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl From<&PricePoint> for OhlcvBar {
    fn from(point: &PricePoint) -> Self {
        Self {
            date: point.timestamp.format(BAR_DATE_FORMAT).to_string(),
            open: point.open.round_dp(DISPLAY_DECIMAL_PRECISION),
            high: point.high.round_dp(DISPLAY_DECIMAL_PRECISION),
            low: point.low.round_dp(DISPLAY_DECIMAL_PRECISION),
            close: point.close.round_dp(DISPLAY_DECIMAL_PRECISION),
            volume: point.volume,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SimulationResultBody {
    pub start_value: Decimal,
    pub end_value: Decimal,
    /// Percentage, rounded to two decimals
    pub growth_rate: Decimal,
    pub value_change: Decimal,
    pub ohlcv_data: Vec<OhlcvBar>,
}

impl From<SimulationResult> for SimulationResultBody {
    fn from(result: SimulationResult) -> Self {
        Self {
            start_value: result.start_value,
            end_value: result.end_value,
            growth_rate: result.growth_rate,
            value_change: result.value_change,
            ohlcv_data: result.ohlcv_data.iter().map(OhlcvBar::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SimulateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SimulationResultBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SimulateResponse {
    pub fn success(result: SimulationResultBody) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}
