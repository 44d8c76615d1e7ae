use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON-formatted log lines.
    pub json_logs: bool,
    /// Degradation events kept in memory before the oldest are evicted.
    pub max_tracked_degradations: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            max_tracked_degradations: defaults::DEFAULT_MAX_TRACKED_DEGRADATIONS,
        }
    }
}
