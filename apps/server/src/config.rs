use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use stocksim_core::constants::DEFAULT_VALID_EXCHANGES;

const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000);
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Output format of the tracing subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub valid_exchanges: Vec<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    /// Settings that were rejected in favour of their defaults. Reported
    /// once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Read the process environment. `.env` is loaded by the binary first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparseable values are
    /// replaced by their defaults and recorded in `warnings`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let listen_addr = lookup("SIM_LISTEN_ADDR")
            .and_then(|raw| match raw.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    warnings.push(format!("Invalid SIM_LISTEN_ADDR '{}': {}", raw, e));
                    None
                }
            })
            .unwrap_or(DEFAULT_LISTEN_ADDR);

        let mut valid_exchanges = lookup("SIM_VALID_EXCHANGES")
            .map(|raw| split_list(&raw))
            .unwrap_or_default();
        if valid_exchanges.is_empty() {
            valid_exchanges = DEFAULT_VALID_EXCHANGES
                .iter()
                .map(|code| code.to_string())
                .collect();
        }

        let mut cors_allow = split_list(&lookup("SIM_CORS_ALLOW_ORIGINS").unwrap_or_default());
        if cors_allow.is_empty() {
            cors_allow.push("*".to_string());
        }

        let timeout_ms = lookup("SIM_REQUEST_TIMEOUT_MS")
            .and_then(|raw| match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Some(ms),
                _ => {
                    warnings.push(format!("Invalid SIM_REQUEST_TIMEOUT_MS '{}'", raw));
                    None
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let log_format = match lookup("SIM_LOG_FORMAT") {
            None => LogFormat::Text,
            Some(raw) if raw.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.trim().eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(raw) => {
                warnings.push(format!("Invalid SIM_LOG_FORMAT '{}'", raw));
                LogFormat::Text
            }
        };

        Self {
            listen_addr,
            valid_exchanges,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
            warnings,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
