use serde::{Deserialize, Serialize};

use super::defaults;

/// Wear subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WearConfig {
    /// Strategy assigned to newly registered assets: "linear" or "exponential".
    pub default_strategy: String,
}

impl Default for WearConfig {
    fn default() -> Self {
        Self {
            default_strategy: defaults::DEFAULT_STRATEGY.to_string(),
        }
    }
}
