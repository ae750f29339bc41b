//! Simulation event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Events emitted by the simulator while serving a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationEvent {
    /// A request was rejected as caller-correctable.
    ValidationFailed {
        exchange: String,
        symbol: String,
        reason: String,
    },

    /// The market data provider failed while serving a request.
    ProviderFailed {
        operation: String,
        symbol: String,
        message: String,
    },

    /// A simulation completed successfully.
    SimulationCompleted {
        exchange: String,
        symbol: String,
        data_points: usize,
        growth_rate: Decimal,
    },
}

impl SimulationEvent {
    pub fn validation_failed(exchange: &str, symbol: &str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            exchange: exchange.to_string(),
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    pub fn provider_failed(operation: &str, symbol: &str, message: impl Into<String>) -> Self {
        Self::ProviderFailed {
            operation: operation.to_string(),
            symbol: symbol.to_string(),
            message: message.into(),
        }
    }

    pub fn simulation_completed(
        exchange: &str,
        symbol: &str,
        data_points: usize,
        growth_rate: Decimal,
    ) -> Self {
        Self::SimulationCompleted {
            exchange: exchange.to_string(),
            symbol: symbol.to_string(),
            data_points,
            growth_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = SimulationEvent::simulation_completed("NASDAQ", "AAPL", 3, dec!(12.5));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "simulation_completed");
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["data_points"], 3);
    }
}
