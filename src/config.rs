use std::path::PathBuf;

use anyhow::{Context, Result};

// ============================================================================
// Server Configuration
// ============================================================================
//
// Read once at startup from the environment:
// - ORDERS_HOST       bind address             (default 0.0.0.0)
// - ORDERS_PORT       bind port                (default 5000)
// - ORDERS_SEED_FILE  JSON array of orders     (default: start empty)
// - ORDERS_METRICS    expose GET /metrics      (default true)
//
// Log filtering is configured separately through RUST_LOG.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed_file: None,
            metrics_enabled: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("ORDERS_HOST").unwrap_or(defaults.host);

        let port = match lookup("ORDERS_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("ORDERS_PORT is not a valid port: {raw}"))?,
            None => defaults.port,
        };

        let seed_file = lookup("ORDERS_SEED_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let metrics_enabled = match lookup("ORDERS_METRICS") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("ORDERS_METRICS must be true or false, got: {raw}"))?,
            None => defaults.metrics_enabled,
        };

        Ok(Self {
            host,
            port,
            seed_file,
            metrics_enabled,
        })
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
