//! # labwear-core
//!
//! Foundation crate for the labwear equipment tracker.
//! Defines the asset entity, incident ledger, lifecycle states, traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod asset;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use asset::{Asset, AssetKind, Capability, Incident, IncidentLedger, LifecycleState, WearIndex};
pub use config::LabConfig;
pub use errors::{LabError, LabResult};
pub use models::{AssetRecord, VisionReport, VisionVerdict};
