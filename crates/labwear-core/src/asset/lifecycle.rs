use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LabError;

/// State names written by the earlier Spanish-language deployment.
const LEGACY_NAMES: &[(&str, LifecycleState)] = &[
    ("OPERATIVO", LifecycleState::Operational),
    ("REPORTADO_CON_FALLA", LifecycleState::ReportedFaulty),
    ("EN_MANTENIMIENTO", LifecycleState::UnderMaintenance),
    ("DE_BAJA", LifecycleState::Decommissioned),
];

/// Equipment lifecycle state. Escalation is one-way: nothing returns to `Operational`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    #[default]
    Operational,
    ReportedFaulty,
    UnderMaintenance,
    Decommissioned,
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 4] = [
        Self::Operational,
        Self::ReportedFaulty,
        Self::UnderMaintenance,
        Self::Decommissioned,
    ];

    /// Stable persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::ReportedFaulty => "REPORTED_FAULTY",
            Self::UnderMaintenance => "UNDER_MAINTENANCE",
            Self::Decommissioned => "DECOMMISSIONED",
        }
    }

    /// Whether `self -> next` is an allowed transition.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Operational, ReportedFaulty)
                | (Operational, Decommissioned)
                | (ReportedFaulty, UnderMaintenance)
                | (ReportedFaulty, Decommissioned)
                | (UnderMaintenance, Decommissioned)
        )
    }

    pub fn is_in_service(self) -> bool {
        self == Self::Operational
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .or_else(|| {
                LEGACY_NAMES
                    .iter()
                    .find(|(name, _)| *name == normalized)
                    .map(|(_, state)| *state)
            })
            .ok_or_else(|| LabError::UnknownState {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_persisted_names() {
        for state in LifecycleState::ALL {
            assert_eq!(state.as_str().parse::<LifecycleState>().unwrap(), state);
        }
        assert_eq!(
            "reported faulty".parse::<LifecycleState>().unwrap(),
            LifecycleState::ReportedFaulty
        );
        assert!("BROKEN".parse::<LifecycleState>().is_err());
    }

    #[test]
    fn parses_legacy_names() {
        assert_eq!(
            "OPERATIVO".parse::<LifecycleState>().unwrap(),
            LifecycleState::Operational
        );
        assert_eq!(
            "reportado con falla".parse::<LifecycleState>().unwrap(),
            LifecycleState::ReportedFaulty
        );
        assert_eq!(
            "EN_MANTENIMIENTO".parse::<LifecycleState>().unwrap(),
            LifecycleState::UnderMaintenance
        );
        assert_eq!(
            "De_Baja".parse::<LifecycleState>().unwrap(),
            LifecycleState::Decommissioned
        );
    }

    #[test]
    fn no_transition_back_to_operational() {
        for state in LifecycleState::ALL {
            assert!(!state.can_transition_to(LifecycleState::Operational));
        }
    }

    #[test]
    fn decommissioned_has_no_exits() {
        for state in LifecycleState::ALL {
            assert!(!LifecycleState::Decommissioned.can_transition_to(state));
        }
    }
}
