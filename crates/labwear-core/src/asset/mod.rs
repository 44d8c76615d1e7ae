pub mod base;
pub mod capability;
pub mod incident;
pub mod kind;
pub mod lifecycle;
pub mod obsolescence;
pub mod wear_index;

pub use base::Asset;
pub use capability::Capability;
pub use incident::{Incident, IncidentLedger, PendingIncident};
pub use kind::AssetKind;
pub use lifecycle::LifecycleState;
pub use obsolescence::{effective_wear, is_critical_annotation};
pub use wear_index::WearIndex;
