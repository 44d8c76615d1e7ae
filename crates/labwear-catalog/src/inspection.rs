//! Inputs and outputs of the incident reporting workflow.

use serde::Serialize;

use labwear_core::models::VisionReport;
use labwear_core::LifecycleState;

/// An image attached to a fault report. Only `reference` is ever stored.
#[derive(Debug, Clone)]
pub struct Evidence {
    pub reference: String,
    pub bytes: Vec<u8>,
}

impl Evidence {
    pub fn new(reference: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            reference: reference.into(),
            bytes,
        }
    }
}

/// A fault report as submitted by a technician.
#[derive(Debug, Clone)]
pub struct IncidentReport {
    pub asset_id: String,
    pub description: String,
    pub reporter: Option<String>,
    pub evidence: Option<Evidence>,
}

impl IncidentReport {
    pub fn new(asset_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            description: description.into(),
            reporter: None,
            evidence: None,
        }
    }

    pub fn reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = Some(reporter.into());
        self
    }

    pub fn evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = Some(evidence);
        self
    }
}

/// What happened to the asset as a result of one report.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionOutcome {
    pub asset_id: String,
    pub incident_id: String,
    pub previous_state: LifecycleState,
    pub state: LifecycleState,
    /// Diagnostic attached to the incident, if evidence was analyzed.
    pub diagnostic: Option<String>,
    pub vision: Option<VisionReport>,
    /// Set when a severe diagnosis moved the asset further along its lifecycle.
    pub escalated: bool,
    pub critical_override: bool,
}
