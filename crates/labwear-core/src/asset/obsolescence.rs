use super::incident::Incident;
use crate::constants::{CRITICAL_MARKERS, CRITICAL_OVERRIDE_WEAR};

/// Whether a diagnostic annotation reports destructive damage.
pub fn is_critical_annotation(annotation: &str) -> bool {
    let lower = annotation.to_lowercase();
    CRITICAL_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Apply the critical override on top of a strategy's output.
///
/// A critical annotation on the most recent incident forces
/// [`CRITICAL_OVERRIDE_WEAR`]; otherwise the strategy value is capped at 1.0.
pub fn effective_wear(strategy_wear: f64, latest: Option<&Incident>) -> f64 {
    let critical = latest
        .and_then(|incident| incident.diagnostic.as_deref())
        .is_some_and(is_critical_annotation);
    if critical {
        CRITICAL_OVERRIDE_WEAR
    } else {
        strategy_wear.min(1.0)
    }
}
