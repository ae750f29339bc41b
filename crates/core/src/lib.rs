//! Stock Simulator Core - exchange registry, investment simulation and
//! symbol listing.
//!
//! This crate holds the domain logic. It talks to market data only through
//! `stocksim_market_data::MarketDataProvider` and reports what happens during
//! a request through an injected `SimulationEventSink`, so it carries no
//! global state of its own.

pub mod constants;
pub mod errors;
pub mod events;
pub mod exchanges;
pub mod simulator;
pub mod symbols;

pub use exchanges::{ExchangeCode, ExchangeRegistry};
pub use simulator::{
    InvestmentSimulator, InvestmentSimulatorTrait, SimulationRequest, SimulationResult,
};
pub use symbols::{SymbolService, SymbolServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
