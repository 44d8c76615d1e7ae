//! Degradation tracking for subsystems that fell back to a reduced mode.

pub mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};
