use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar returned by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Start of the trading session the bar covers
    pub timestamp: DateTime<Utc>,

    /// Opening price
    pub open: Decimal,

    /// Session high
    pub high: Decimal,

    /// Session low
    pub low: Decimal,

    /// Closing price
    pub close: Decimal,

    /// Shares traded during the session
    pub volume: u64,
}

impl PricePoint {
    /// Create a full OHLCV bar
    pub fn new(
        timestamp: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
