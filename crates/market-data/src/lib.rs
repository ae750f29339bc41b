//! Stock Simulator Market Data Crate
//!
//! This crate provides provider-agnostic access to historical prices and
//! ticker metadata for the stock simulator.
//!
//! # Overview
//!
//! ```text
//! +------------------+      +----------------------+
//! | Simulator (core) | ---> | dyn MarketDataProvider|
//! +------------------+      +----------------------+
//!                                     |
//!                                     v
//!                            +------------------+
//!                            |  YahooProvider   |
//!                            +------------------+
//!                                     |
//!                                     v
//!                       TickerInfo / Vec<PricePoint>
//! ```
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - Provider abstraction consumed by the core
//! - [`PricePoint`] - Daily OHLCV bar
//! - [`TickerInfo`] - Canonical symbol and listing metadata
//! - [`MarketDataError`] - Error type for every provider operation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{PricePoint, TickerInfo};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
