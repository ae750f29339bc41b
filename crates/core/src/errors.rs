//! Core error types for the stock simulator.
//!
//! Errors fall in two groups. [`Error::Validation`] is caller-correctable and
//! carries a message meant for the caller. Everything else is an internal
//! failure: the boundary logs it and reports a generic message.

use stocksim_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the simulator core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Build a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Returns true for caller-correctable errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
