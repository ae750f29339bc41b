use serde::{Deserialize, Serialize};

/// Metadata a provider reports for a ticker symbol.
///
/// `symbol` is the provider's canonical spelling of the ticker. Callers
/// compare it against what they asked for to detect aliases and unknown
/// symbols that the provider silently resolved to something else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerInfo {
    /// Canonical symbol (e.g., "AAPL", "VOD.L")
    pub symbol: String,

    /// Short display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Full company/fund name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Provider exchange code (e.g., "NMS", "LSE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Trading currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Instrument type (e.g., "EQUITY", "ETF")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<String>,
}

impl TickerInfo {
    /// Create ticker info carrying only the canonical symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Set the exchange code.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }
}
