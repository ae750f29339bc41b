//! Yahoo Finance market data provider.
//!
//! - Ticker metadata comes from the quoteSummary `price` module, with the
//!   search endpoint as a fallback.
//! - Daily history comes from the chart API via `yahoo_finance_api`.
//! - Symbol listing is a search filtered by the exchange's listing conventions.

mod exchanges;
mod models;

pub use exchanges::{yahoo_exchange, YahooExchange};

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::header;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{PricePoint, TickerInfo};
use crate::provider::MarketDataProvider;

use models::{YahooPriceData, YahooQuoteSummaryResponse};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to initialize Yahoo connector: {}", e),
            )
        })?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let cached = YAHOO_CRUMB.read().ok().and_then(|guard| guard.clone());
        if let Some(crumb) = cached {
            return Ok(crumb);
        }
        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }
        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Ticker Info
    // ========================================================================

    /// Fetch ticker info from the quoteSummary `price` module.
    async fn fetch_quote_summary_info(&self, symbol: &str) -> Result<TickerInfo, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Ticker info request failed: {}", e))
            })?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    "Yahoo authentication expired",
                ));
            }
            reqwest::StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse = response.json().await.map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to parse ticker info response: {}", e),
            )
        })?;

        if let Some(error) = data.quote_summary.error {
            debug!(
                "quoteSummary error for {}: {:?} {:?}",
                symbol, error.code, error.description
            );
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let price = data
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .find_map(|r| r.price)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        price_to_ticker_info(price)
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("quoteSummary for {} carried no symbol", symbol),
            })
    }

    /// Fetch ticker info from the search endpoint (minimal data).
    async fn fetch_search_info(&self, symbol: &str) -> Result<TickerInfo, MarketDataError> {
        let result = self
            .connector
            .search_ticker(&encode(symbol))
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, e.to_string()))?;

        let item = result
            .quotes
            .iter()
            .find(|q| q.symbol == symbol)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let mut info = TickerInfo::new(item.symbol.clone()).with_exchange(item.exchange.clone());
        info.short_name = non_empty(&item.short_name);
        info.long_name = non_empty(&item.long_name);
        info.quote_type = non_empty(&item.quote_type).map(|t| t.to_uppercase());
        Ok(info)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Convert a calendar day to midnight UTC for the Yahoo API.
    fn day_to_offset_datetime(day: NaiveDate) -> OffsetDateTime {
        let midnight = day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        OffsetDateTime::from_unix_timestamp(midnight.timestamp())
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Convert a Yahoo bar to our PricePoint model.
    fn yahoo_quote_to_price_point(yahoo_quote: &yahoo::Quote) -> Result<PricePoint, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        let decimal = |field: &str, value: f64| {
            Decimal::from_f64_retain(value).ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Failed to convert {} price {} to Decimal", field, value),
            })
        };

        Ok(PricePoint {
            timestamp,
            open: decimal("open", yahoo_quote.open)?,
            high: decimal("high", yahoo_quote.high)?,
            low: decimal("low", yahoo_quote.low)?,
            close: decimal("close", yahoo_quote.close)?,
            volume: yahoo_quote.volume,
        })
    }

    /// Map a chart API failure, separating "nothing to return" answers from
    /// real provider failures.
    ///
    /// The chart endpoint rejects ranges before a listing (or after a
    /// delisting) with a 4xx status, which the connector reports as
    /// `FetchFailed("400 Bad Request")`.
    fn map_yahoo_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
        match e {
            yahoo::YahooError::NoResult => MarketDataError::SymbolNotFound(symbol.to_string()),
            yahoo::YahooError::NoQuotes => {
                MarketDataError::NoDataForRange
            }
            yahoo::YahooError::FetchFailed(ref status) if is_missing_range_status(status) => {
                debug!("Yahoo has no history for {}: {}", symbol, status);
                MarketDataError::NoDataForRange
            }
            other => MarketDataError::provider(PROVIDER_ID, other.to_string()),
        }
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_ticker_info(&self, symbol: &str) -> Result<TickerInfo, MarketDataError> {
        debug!("Fetching ticker info for {} from Yahoo", symbol);

        match self.fetch_quote_summary_info(symbol).await {
            Ok(info) => return Ok(info),
            Err(e) => {
                debug!(
                    "quoteSummary failed for {}: {}, trying search fallback",
                    symbol, e
                );
            }
        }

        self.fetch_search_info(symbol).await
    }

    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        debug!(
            "Fetching daily history for {} from {} to {} from Yahoo",
            symbol, start, end
        );

        let response = self
            .connector
            .get_quote_history(
                symbol,
                Self::day_to_offset_datetime(start),
                Self::day_to_offset_datetime(end),
            )
            .await
            .map_err(|e| Self::map_yahoo_error(symbol, e))?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let mut points: Vec<PricePoint> = yahoo_quotes
                    .iter()
                    .filter_map(|q| match Self::yahoo_quote_to_price_point(q) {
                        Ok(point) => Some(point),
                        Err(e) => {
                            warn!("Skipping bar due to conversion error: {:?}", e);
                            None
                        }
                    })
                    .collect();
                points.sort_by_key(|p| p.timestamp);
                Ok(points)
            }
            Err(e) => {
                warn!(
                    "No usable quotes for '{}' between {} and {}: {}",
                    symbol, start, end, e
                );
                Err(Self::map_yahoo_error(symbol, e))
            }
        }
    }

    async fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, MarketDataError> {
        debug!("Listing symbols for exchange '{}' via Yahoo search", exchange);

        let result = self
            .connector
            .search_ticker(&encode(exchange))
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, e.to_string()))?;

        let conventions = yahoo_exchange(exchange);
        if conventions.is_none() {
            warn!(
                "No Yahoo listing conventions for '{}', returning unfiltered search hits",
                exchange
            );
        }

        let symbols = result
            .quotes
            .iter()
            .filter(|item| {
                conventions
                    .map(|c| c.matches(&item.symbol, &item.exchange))
                    .unwrap_or(true)
            })
            .map(|item| item.symbol.clone())
            .collect();

        Ok(symbols)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Client-error statuses that mean "no data for this request". Auth and
/// rate-limit rejections stay provider failures.
fn is_missing_range_status(status: &str) -> bool {
    let code = status
        .split_whitespace()
        .next()
        .and_then(|code| code.parse::<u16>().ok());
    matches!(code, Some(400..=499)) && !matches!(code, Some(401 | 403 | 429))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Map the quoteSummary price module to TickerInfo.
fn price_to_ticker_info(price: YahooPriceData) -> Option<TickerInfo> {
    let symbol = price.symbol.filter(|s| !s.trim().is_empty())?;
    Some(TickerInfo {
        symbol,
        short_name: price.short_name,
        long_name: price.long_name,
        exchange: price.exchange,
        currency: price.currency,
        quote_type: price.quote_type.map(|t| t.to_uppercase()),
    })
}

// ============================================================================
// Tests
// ============================================================================
