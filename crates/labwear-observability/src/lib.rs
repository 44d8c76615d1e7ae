//! # labwear-observability
//!
//! Tracing subscriber setup, span macros, structured event helpers, and a
//! tracker for subsystems running in a fallback mode.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
