use chrono::NaiveDate;

use labwear_core::traits::IWearStrategy;

use crate::elapsed;

/// Accelerating wear, suited to electronic equipment.
///
/// Formula: `clamp((e^(0.2 × years) − 1) / 10, 0, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialWear;

impl ExponentialWear {
    pub const NAME: &'static str = "exponential";
    pub const GROWTH_RATE: f64 = 0.2;
    pub const SCALE: f64 = 10.0;

    pub fn wear_for_years(years: i32) -> f64 {
        let raw = ((Self::GROWTH_RATE * f64::from(years)).exp() - 1.0) / Self::SCALE;
        raw.clamp(0.0, 1.0)
    }
}

impl IWearStrategy for ExponentialWear {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn calculate_at(&self, acquisition_date: &str, as_of: NaiveDate) -> f64 {
        match elapsed::years_since(acquisition_date, as_of) {
            Some(years) => Self::wear_for_years(years),
            None => super::unparseable(Self::NAME, acquisition_date),
        }
    }
}
