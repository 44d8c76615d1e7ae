//! Wear formula implementations.

mod exponential;
mod linear;

pub use exponential::ExponentialWear;
pub use linear::LinearWear;

use labwear_core::constants::UNPARSEABLE_DATE_WEAR;

/// Default returned when the acquisition date cannot be parsed.
pub(crate) fn unparseable(strategy: &'static str, acquisition_date: &str) -> f64 {
    tracing::warn!(
        strategy,
        acquisition_date = %acquisition_date,
        fallback = UNPARSEABLE_DATE_WEAR,
        "unparseable acquisition date"
    );
    UNPARSEABLE_DATE_WEAR
}
