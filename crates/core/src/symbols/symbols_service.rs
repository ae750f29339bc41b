use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use stocksim_market_data::{MarketDataError, MarketDataProvider};

use crate::errors::Result;

/// Trait for symbol listing operations
#[async_trait]
pub trait SymbolServiceTrait: Send + Sync {
    /// Ticker symbols the provider knows for `exchange`.
    async fn list_symbols_for_exchange(&self, exchange: &str) -> Result<Vec<String>>;
}

/// Lists ticker symbols by delegating to the market data provider.
///
/// Results are best-effort: they are whatever the provider reports for the
/// exchange and may be incomplete.
pub struct SymbolService {
    provider: Arc<dyn MarketDataProvider>,
}

impl SymbolService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SymbolServiceTrait for SymbolService {
    async fn list_symbols_for_exchange(&self, exchange: &str) -> Result<Vec<String>> {
        debug!(
            "Listing symbols for {} via {}",
            exchange,
            self.provider.id()
        );
        self.provider.list_symbols(exchange).await.map_err(|e| {
            MarketDataError::ProviderError {
                provider: self.provider.id().to_string(),
                message: format!("Failed to fetch symbols for exchange {}: {}", exchange, e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::NaiveDate;
    use stocksim_market_data::{PricePoint, TickerInfo};

    struct ListingProvider {
        symbols: Option<Vec<&'static str>>,
    }

    #[async_trait]
    impl MarketDataProvider for ListingProvider {
        fn id(&self) -> &'static str {
            "LISTING"
        }

        async fn get_ticker_info(
            &self,
            symbol: &str,
        ) -> std::result::Result<TickerInfo, MarketDataError> {
            Ok(TickerInfo::new(symbol))
        }

        async fn get_history(
            &self,
            _symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> std::result::Result<Vec<PricePoint>, MarketDataError> {
            Ok(Vec::new())
        }

        async fn list_symbols(
            &self,
            _exchange: &str,
        ) -> std::result::Result<Vec<String>, MarketDataError> {
            match &self.symbols {
                Some(symbols) => Ok(symbols.iter().map(|s| s.to_string()).collect()),
                None => Err(MarketDataError::provider("LISTING", "HTTP 500")),
            }
        }
    }

    #[tokio::test]
    async fn test_lists_provider_symbols() {
        let service = SymbolService::new(Arc::new(ListingProvider {
            symbols: Some(vec!["VOD.L", "BARC.L"]),
        }));
        let symbols = service.list_symbols_for_exchange("LSE").await.unwrap();
        assert_eq!(symbols, vec!["VOD.L", "BARC.L"]);
    }

    #[tokio::test]
    async fn test_provider_failure_names_exchange() {
        let service = SymbolService::new(Arc::new(ListingProvider { symbols: None }));
        let err = service.list_symbols_for_exchange("LSE").await.unwrap_err();
        assert!(matches!(err, Error::MarketData(_)));
        assert!(err
            .to_string()
            .contains("Failed to fetch symbols for exchange LSE"));
    }

    #[tokio::test]
    async fn test_unsupported_listing_is_an_error() {
        struct NoListing;

        #[async_trait]
        impl MarketDataProvider for NoListing {
            fn id(&self) -> &'static str {
                "NO_LISTING"
            }

            async fn get_ticker_info(
                &self,
                symbol: &str,
            ) -> std::result::Result<TickerInfo, MarketDataError> {
                Ok(TickerInfo::new(symbol))
            }

            async fn get_history(
                &self,
                _symbol: &str,
                _start: NaiveDate,
                _end: NaiveDate,
            ) -> std::result::Result<Vec<PricePoint>, MarketDataError> {
                Ok(Vec::new())
            }
        }

        let service = SymbolService::new(Arc::new(NoListing));
        let err = service.list_symbols_for_exchange("NYSE").await.unwrap_err();
        assert!(err.to_string().contains("not supported by NO_LISTING"));
    }
}
