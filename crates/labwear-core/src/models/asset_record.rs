use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::asset::{Capability, Incident};

/// Flat, storage-facing shape of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub model: String,
    /// Persisted kind name, see [`crate::AssetKind::name`].
    pub kind: String,
    pub acquisition_date: String,
    pub state: String,
    pub strategy_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default)]
    pub type_specific_details: BTreeMap<String, serde_json::Value>,
    /// Empty means "use the kind's defaults".
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
}
