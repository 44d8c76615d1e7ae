use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::kind::AssetKind;

/// Optional behaviour an asset opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Carries a printable QR label resolving to its identifier.
    QrIdentifiable,
    /// Supports forward projection of its wear index.
    PredictiveAnalysis,
    /// Accepts photographic evidence for the darkness heuristic.
    VisualInspection,
}

impl Capability {
    /// Capabilities granted to a freshly registered asset of the given kind.
    pub fn defaults_for(kind: &AssetKind) -> BTreeSet<Capability> {
        let mut caps = BTreeSet::from([Self::QrIdentifiable, Self::VisualInspection]);
        if matches!(kind, AssetKind::InductionMotor { .. }) {
            caps.insert(Self::PredictiveAnalysis);
        }
        caps
    }
}
