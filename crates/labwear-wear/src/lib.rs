//! # labwear-wear
//!
//! Time-based wear strategies (linear, exponential), the shared strategy
//! registry, and the obsolescence engine that layers the critical override,
//! condition bands, and forecasting on top of them.

pub mod condition;
pub mod elapsed;
pub mod engine;
pub mod registry;
pub mod strategies;

pub use condition::ConditionBand;
pub use engine::{ObsolescenceBreakdown, ObsolescenceEngine};
pub use registry::StrategyRegistry;
pub use strategies::{ExponentialWear, LinearWear};
