//! Simulator module - investment simulation models, service, and traits.

mod simulator_model;
mod simulator_service;
mod simulator_traits;


pub use simulator_model::{
    GrowthError, GrowthMetrics, InvalidReason, SimulationRequest, SimulationResult,
    StockValidation,
};
pub use simulator_service::{compute_growth, InvestmentSimulator};
pub use simulator_traits::InvestmentSimulatorTrait;
