//! Yahoo listing conventions for the exchanges the simulator knows about.
//!
//! Yahoo identifies a listing two ways: the exchange code it reports in
//! search results ("NMS", "LSE", ...) and the suffix it appends to non-US
//! tickers (".L", ".HK", ...). Symbol listing uses both to keep only the
//! search hits that belong to the requested exchange.

/// Yahoo conventions for one exchange.
#[derive(Clone, Copy, Debug)]
pub struct YahooExchange {
    /// Exchange code as used by the application (e.g., "NASDAQ")
    pub code: &'static str,
    /// Ticker suffix Yahoo uses for this exchange (empty for US venues)
    pub suffix: &'static str,
    /// Exchange codes Yahoo reports in search results
    pub yahoo_codes: &'static [&'static str],
}

const YAHOO_EXCHANGES: &[YahooExchange] = &[
    YahooExchange {
        code: "NASDAQ",
        suffix: "",
        yahoo_codes: &["NMS", "NGM", "NCM", "NAS"],
    },
    YahooExchange {
        code: "NYSE",
        suffix: "",
        yahoo_codes: &["NYQ", "NYS"],
    },
    YahooExchange {
        code: "B3",
        suffix: ".SA",
        yahoo_codes: &["SAO"],
    },
    YahooExchange {
        code: "LSE",
        suffix: ".L",
        yahoo_codes: &["LSE", "IOB"],
    },
    YahooExchange {
        code: "TSE",
        suffix: ".T",
        yahoo_codes: &["JPX", "TYO"],
    },
    YahooExchange {
        code: "HKSE",
        suffix: ".HK",
        yahoo_codes: &["HKG"],
    },
    YahooExchange {
        code: "HKEX",
        suffix: ".HK",
        yahoo_codes: &["HKG"],
    },
    YahooExchange {
        code: "TSX",
        suffix: ".TO",
        yahoo_codes: &["TOR"],
    },
    YahooExchange {
        code: "ASX",
        suffix: ".AX",
        yahoo_codes: &["ASX"],
    },
    YahooExchange {
        code: "FRA",
        suffix: ".F",
        yahoo_codes: &["FRA"],
    },
    YahooExchange {
        code: "BSE",
        suffix: ".BO",
        yahoo_codes: &["BSE"],
    },
    YahooExchange {
        code: "NSE",
        suffix: ".NS",
        yahoo_codes: &["NSI"],
    },
];

/// Look up Yahoo conventions for an exchange code (case-insensitive).
pub fn yahoo_exchange(code: &str) -> Option<&'static YahooExchange> {
    YAHOO_EXCHANGES
        .iter()
        .find(|e| e.code.eq_ignore_ascii_case(code))
}

impl YahooExchange {
    /// Whether a Yahoo search hit belongs to this exchange.
    pub fn matches(&self, symbol: &str, yahoo_exchange_code: &str) -> bool {
        if self
            .yahoo_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(yahoo_exchange_code))
        {
            return true;
        }
        !self.suffix.is_empty() && symbol.ends_with(self.suffix)
    }
}
