use serde::{Deserialize, Serialize};

use labwear_core::LifecycleState;

/// Wear at or above which an asset is treated as out of service.
pub const OUT_OF_SERVICE_WEAR: f64 = 0.95;

/// Coarse condition of an asset, derived from wear and lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionBand {
    Optimal,
    Moderate,
    Advanced,
    Critical,
    OutOfService,
}

impl ConditionBand {
    pub fn assess(wear: f64, state: LifecycleState) -> Self {
        if wear >= OUT_OF_SERVICE_WEAR || !state.is_in_service() {
            Self::OutOfService
        } else if wear < 0.2 {
            Self::Optimal
        } else if wear < 0.5 {
            Self::Moderate
        } else if wear < 0.8 {
            Self::Advanced
        } else {
            Self::Critical
        }
    }

    /// Bands that warrant attention on a fleet overview.
    pub fn is_alert(self) -> bool {
        matches!(self, Self::Advanced | Self::Critical | Self::OutOfService)
    }

    /// Recommended action.
    pub fn note(self) -> &'static str {
        match self {
            Self::Optimal => "optimal condition, standard use",
            Self::Moderate => "moderate wear, schedule a preventive inspection",
            Self::Advanced => "advanced wear, schedule maintenance",
            Self::Critical => "critical wear, evaluate replacement",
            Self::OutOfService => "out of service, review the visual diagnostic",
        }
    }
}
