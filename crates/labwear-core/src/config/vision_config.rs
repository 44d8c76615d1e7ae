use serde::{Deserialize, Serialize};

use super::defaults;

/// Darkness heuristic configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Luminance (0-255) strictly below which a pixel counts as dark.
    pub dark_threshold: u8,
    /// Dark-area percentage strictly above which an image is severe.
    pub severe_area_percent: f64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            dark_threshold: defaults::DEFAULT_DARK_THRESHOLD,
            severe_area_percent: defaults::DEFAULT_SEVERE_AREA_PERCENT,
        }
    }
}
