use serde::{Deserialize, Serialize};

use super::{CatalogConfig, SessionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Every field has a compiled default, so an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DyadConfig {
    pub session: SessionConfig,
    pub catalog: CatalogConfig,
}

impl DyadConfig {
    /// Load and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: DyadConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()
    }
}
