//! Market data models
//!
//! - `price_point` - Daily OHLCV bars (PricePoint)
//! - `ticker_info` - Provider metadata for a symbol (TickerInfo)

mod price_point;
mod ticker_info;

pub use price_point::PricePoint;
pub use ticker_info::TickerInfo;
