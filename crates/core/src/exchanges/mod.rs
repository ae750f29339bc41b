//! Exchanges module - the fixed set of exchanges requests may name.

mod exchange_registry;

pub use exchange_registry::{ExchangeCode, ExchangeRegistry};
