//! # labwear-catalog
//!
//! The location-grouped equipment catalog, the mapping between assets and
//! their flat storage records, the built-in seed fleet, and `LabContext`,
//! which runs every mutating operation under one catalog lock.

pub mod catalog;
pub mod context;
pub mod fixtures;
pub mod inspection;
pub mod mapper;
pub mod report;

pub use catalog::EquipmentCatalog;
pub use context::{LabContext, LabContextBuilder, NewAsset};
pub use inspection::{Evidence, IncidentReport, InspectionOutcome};
pub use report::{AssetReport, LocationSummary, ScanResult};
