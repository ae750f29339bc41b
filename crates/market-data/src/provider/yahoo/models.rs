//! Yahoo Finance API response models.
//!
//! These models are used for parsing the quoteSummary `price` module, which
//! carries the canonical symbol and listing metadata for a ticker.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// Error object Yahoo embeds in the body for unknown symbols
#[derive(Debug, Deserialize)]
pub struct YahooApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
}

/// Price module from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub quote_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_module() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "symbol": "AAPL",
                        "currency": "USD",
                        "exchange": "NMS",
                        "shortName": "Apple Inc.",
                        "longName": "Apple Inc.",
                        "quoteType": "EQUITY",
                        "regularMarketPrice": {"raw": 189.84, "fmt": "189.84"}
                    }
                }],
                "error": null
            }
        }"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let result = response.quote_summary.result.unwrap();
        let price = result[0].price.as_ref().unwrap();
        assert_eq!(price.symbol.as_deref(), Some("AAPL"));
        assert_eq!(price.exchange.as_deref(), Some("NMS"));
        assert_eq!(price.quote_type.as_deref(), Some("EQUITY"));
    }

    #[test]
    fn test_deserialize_not_found_error() {
        let json = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for symbol: INVALID"}
            }
        }"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_none());
        let error = response.quote_summary.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("Not Found"));
    }
}
