use std::fmt::Debug;

use chrono::{NaiveDate, Utc};

/// Pluggable wear formula mapping an acquisition date to a wear fraction.
///
/// Implementations are stateless and shared between assets behind an `Arc`.
pub trait IWearStrategy: Debug + Send + Sync {
    /// Stable name used for persistence and lookup.
    fn name(&self) -> &'static str;

    /// Wear in [0.0, 1.0] for an asset acquired on `acquisition_date`
    /// (ISO `YYYY-MM-DD`), evaluated as of `as_of`.
    ///
    /// An unparseable date yields a safe default instead of an error.
    fn calculate_at(&self, acquisition_date: &str, as_of: NaiveDate) -> f64;

    /// Wear evaluated as of today (UTC).
    fn calculate(&self, acquisition_date: &str) -> f64 {
        self.calculate_at(acquisition_date, Utc::now().date_naive())
    }
}
