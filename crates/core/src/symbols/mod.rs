//! Symbols module - ticker listings per exchange.

mod symbols_service;

pub use symbols_service::{SymbolService, SymbolServiceTrait};
