//! Simulation event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::SimulationEvent;

/// Trait for receiving simulation events.
///
/// - `emit()` must be fast and non-blocking (no network calls)
/// - Failure to emit must not affect the simulation (best-effort)
pub trait SimulationEventSink: Send + Sync {
    /// Emit a single simulation event.
    fn emit(&self, event: SimulationEvent);
}

/// Forwards events to the `log` facade.
///
/// Provider failures are logged at `error`, rejected requests at `warn` and
/// completed runs at `info`.
#[derive(Clone, Default)]
pub struct LogEventSink;

impl SimulationEventSink for LogEventSink {
    fn emit(&self, event: SimulationEvent) {
        match event {
            SimulationEvent::ValidationFailed {
                exchange,
                symbol,
                reason,
            } => log::warn!(
                "Rejected simulation for {}:{}: {}",
                exchange,
                symbol,
                reason
            ),
            SimulationEvent::ProviderFailed {
                operation,
                symbol,
                message,
            } => log::error!("Error during {} for {}: {}", operation, symbol, message),
            SimulationEvent::SimulationCompleted {
                exchange,
                symbol,
                data_points,
                growth_rate,
            } => log::info!(
                "Simulated {}:{} over {} data points, growth {}%",
                exchange,
                symbol,
                data_points,
                growth_rate
            ),
        }
    }
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpEventSink;

impl SimulationEventSink for NoOpEventSink {
    fn emit(&self, _event: SimulationEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or_default()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SimulationEventSink for MockEventSink {
    fn emit(&self, event: SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_noop_and_log_sinks_do_not_panic() {
        let event = SimulationEvent::provider_failed("ticker_info", "AAPL", "timeout");
        NoOpEventSink.emit(event.clone());
        LogEventSink.emit(event);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockEventSink::new();
        assert!(sink.is_empty());

        sink.emit(SimulationEvent::validation_failed(
            "MOON",
            "AAPL",
            "exchange not permitted",
        ));
        sink.emit(SimulationEvent::simulation_completed(
            "NASDAQ",
            "AAPL",
            2,
            dec!(10),
        ));
        assert_eq!(sink.len(), 2);
        assert!(matches!(
            sink.events()[0],
            SimulationEvent::ValidationFailed { .. }
        ));
    }
}
