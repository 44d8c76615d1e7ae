use chrono::NaiveDate;

use labwear_core::traits::IWearStrategy;

use crate::elapsed;

/// Constant annual wear, suited to mechanical equipment.
///
/// Formula: `clamp(years × 0.05, 0, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearWear;

impl LinearWear {
    pub const NAME: &'static str = "linear";
    /// Fraction of value lost per year.
    pub const ANNUAL_RATE: f64 = 0.05;

    pub fn wear_for_years(years: i32) -> f64 {
        (f64::from(years) * Self::ANNUAL_RATE).clamp(0.0, 1.0)
    }
}

impl IWearStrategy for LinearWear {
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
