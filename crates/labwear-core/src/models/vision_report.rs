use serde::{Deserialize, Serialize};

/// Outcome class of a visual inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisionVerdict {
    Critical,
    Normal,
    /// The image could not be decoded; no classification was made.
    Unreadable,
}

/// Result of the darkness heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionReport {
    pub verdict: VisionVerdict,
    pub severe: bool,
    pub diagnosis: String,
    /// Dark pixels as a percentage of all pixels, 0.0 when unreadable.
    pub dark_area_percent: f64,
}

impl VisionReport {
    pub fn unreadable(reason: impl std::fmt::Display) -> Self {
        Self {
            verdict: VisionVerdict::Unreadable,
            severe: false,
            diagnosis: format!("image analysis failed: {reason}"),
            dark_area_percent: 0.0,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        self.verdict == VisionVerdict::Unreadable
    }
}
