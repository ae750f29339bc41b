use std::sync::Arc;

use stocksim_core::{
    events::LogEventSink, ExchangeRegistry, InvestmentSimulator, InvestmentSimulatorTrait,
    SymbolService, SymbolServiceTrait,
};
use stocksim_market_data::{MarketDataProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub simulator: Arc<dyn InvestmentSimulatorTrait>,
    pub symbol_service: Arc<dyn SymbolServiceTrait>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Wire the services against the live Yahoo Finance provider.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = YahooProvider::new()?;
    tracing::info!("Market data provider: {}", provider.id());
    Ok(build_state_with_provider(config, Arc::new(provider)))
}

pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> Arc<AppState> {
    let exchanges = ExchangeRegistry::new(config.valid_exchanges.iter());
    tracing::info!("Valid exchanges: {}", exchanges.list().join(", "));

    let simulator = Arc::new(InvestmentSimulator::new(
        exchanges,
        provider.clone(),
        Arc::new(LogEventSink),
    ));
    let symbol_service = Arc::new(SymbolService::new(provider));

    Arc::new(AppState {
        simulator,
        symbol_service,
    })
}
