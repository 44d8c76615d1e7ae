//! Layered configuration loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
mod inspection_config;
mod observability_config;
mod storage_config;
mod vision_config;
mod wear_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use inspection_config::{InspectionConfig, SevereEscalation};
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use vision_config::VisionConfig;
pub use wear_config::WearConfig;

use crate::errors::{LabError, LabResult};

/// Top-level configuration for the whole workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub storage: StorageConfig,
    pub wear: WearConfig,
    pub vision: VisionConfig,
    pub inspection: InspectionConfig,
    pub observability: ObservabilityConfig,
}

impl LabConfig {
    /// Parse a configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> LabResult<Self> {
        toml::from_str(source).map_err(|e| LabError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> LabResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| LabError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }
}
