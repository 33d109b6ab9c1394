//! Gateway settings

use gatehouse_core::{GatehouseError, ProviderKind, Result};
use serde::Deserialize;

/// Which provider this gateway instance authenticates against, and which
/// site domains are eligible for access decisions.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,
    /// Domain whitelist; empty means every stored site is eligible
    #[serde(default)]
    pub domains: Vec<String>,
}

fn default_provider() -> ProviderKind {
    ProviderKind::Generic
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            // Load from config file if present
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Load from environment variables with GATEHOUSE_ prefix
            .add_source(
                config::Environment::with_prefix("GATEHOUSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| GatehouseError::ConfigError {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| GatehouseError::ConfigError {
                message: e.to_string(),
            })
    }

    /// True iff `domain` may be the target of an access decision.
    pub fn allows_domain(&self, domain: &str) -> bool {
        self.domains.is_empty() || self.domains.iter().any(|d| d == domain)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Generic,
            domains: vec![],
        }
    }
}
