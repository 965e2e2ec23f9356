use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Session coordinator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds a session stays visible after creation. Negative values
    /// produce sessions that are already expired, which the expiry
    /// tests rely on instead of sleeping.
    pub ttl_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.ttl_secs".to_string(),
                reason: "must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}
