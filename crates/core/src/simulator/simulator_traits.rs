use async_trait::async_trait;

use crate::errors::Result;
use crate::exchanges::ExchangeRegistry;
use crate::simulator::simulator_model::{SimulationRequest, SimulationResult, StockValidation};

/// Trait for investment simulation operations
#[async_trait]
pub trait InvestmentSimulatorTrait: Send + Sync {
    /// Exchanges this simulator accepts.
    fn exchanges(&self) -> &ExchangeRegistry;

    /// Check an (exchange, symbol) pair, keeping the reason for a rejection.
    async fn check_stock(&self, exchange: &str, symbol: &str) -> StockValidation;

    /// Boolean form of [`check_stock`](Self::check_stock). Never fails.
    async fn validate_stock(&self, exchange: &str, symbol: &str) -> bool {
        self.check_stock(exchange, symbol).await.is_valid()
    }

    async fn simulate_investment(&self, request: &SimulationRequest) -> Result<SimulationResult>;
}
