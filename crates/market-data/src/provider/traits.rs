//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::{PricePoint, TickerInfo};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stocksim_market_data::{MarketDataError, MarketDataProvider, PricePoint, TickerInfo};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_ticker_info(&self, symbol: &str) -> Result<TickerInfo, MarketDataError> {
///         Ok(TickerInfo::new(symbol))
///     }
///
///     // ... implement get_history
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch metadata for a ticker symbol.
    ///
    /// The returned [`TickerInfo::symbol`] is the provider's canonical symbol,
    /// which may differ from the requested one.
    async fn get_ticker_info(&self, symbol: &str) -> Result<TickerInfo, MarketDataError>;

    /// Fetch daily price bars for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Provider symbol
    /// * `start` - First day of the range (inclusive)
    /// * `end` - Last day of the range (exclusive)
    ///
    /// # Returns
    ///
    /// Bars ordered by timestamp ascending. An empty range may be reported
    /// either as an empty vector or as [`MarketDataError::NoDataForRange`].
    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, MarketDataError>;

    /// List ticker symbols traded on an exchange.
    ///
    /// Default implementation returns `NotSupported`.
    async fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, MarketDataError> {
        let _ = exchange;
        Err(MarketDataError::NotSupported {
            operation: "list_symbols".to_string(),
            provider: self.id().to_string(),
        })
    }
}
