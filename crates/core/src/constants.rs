/// Exchanges accepted when no explicit list is configured
pub const DEFAULT_VALID_EXCHANGES: &[&str] = &["B3", "NYSE", "NASDAQ", "LSE", "TSE", "HKSE"];

/// Decimal precision for reported simulation figures
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Message for an exchange outside the registry or an unrecognised symbol
pub const INVALID_STOCK_MESSAGE: &str = "Invalid exchange or stock symbol";

/// Message for a date range without trading data
pub const NO_HISTORY_MESSAGE: &str = "No historical data available for the given date range";
