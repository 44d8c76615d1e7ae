//! # labwear-vision
//!
//! Counts low-luminance pixels in an equipment photo and flags the image as
//! critical (likely carbonized) when the dark area exceeds a threshold.

pub mod darkness;

pub use darkness::DarknessHeuristic;
