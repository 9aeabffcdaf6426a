//! Tracing setup for the registrar CLI
//!
//! Usage:
//!   registrar --debug ...                       # Debug logging to console
//!   RUST_LOG=registrar_server=debug registrar   # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                                    # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info,tower_http=info,sqlx=warn"
        }
    }
}

/// Initialize console tracing.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_raises_default_level() {
        assert_eq!(TracingConfig { debug: true }.default_directive(), "debug");
        assert!(TracingConfig::default().default_directive().starts_with("info"));
    }
}
