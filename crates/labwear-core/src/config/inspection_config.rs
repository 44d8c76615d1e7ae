use serde::{Deserialize, Serialize};

use super::defaults;
use crate::asset::LifecycleState;

/// State an asset escalates to when a severe visual diagnosis is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SevereEscalation {
    #[default]
    UnderMaintenance,
    Decommissioned,
}

impl SevereEscalation {
    pub fn target_state(self) -> LifecycleState {
        match self {
            Self::UnderMaintenance => LifecycleState::UnderMaintenance,
            Self::Decommissioned => LifecycleState::Decommissioned,
        }
    }
}

/// Incident reporting workflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionConfig {
    /// Escalation target for severe diagnoses.
    pub severe_escalation: SevereEscalation,
    /// Reject incident reports with a blank description.
    pub require_description: bool,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            severe_escalation: SevereEscalation::default(),
            require_description: defaults::DEFAULT_REQUIRE_DESCRIPTION,
        }
    }
}
