//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! The simulator core only ever talks to `dyn MarketDataProvider`, so tests
//! and alternative data sources plug in without touching it.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
