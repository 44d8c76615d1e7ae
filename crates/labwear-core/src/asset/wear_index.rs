use std::fmt;

use serde::{Deserialize, Serialize};

/// Fractional depreciation of an asset, clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct WearIndex(f64);

impl WearIndex {
    /// Create a new WearIndex, clamping to [0.0, 1.0]. NaN maps to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded to two decimals, the conventional presentation.
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Remaining useful life: `max(0, 1 - wear)`.
    pub fn remaining_life(self) -> f64 {
        (1.0 - self.0).max(0.0)
    }
}

impl fmt::Display for WearIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percent())
    }
}

impl From<f64> for WearIndex {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<WearIndex> for f64 {
    fn from(w: WearIndex) -> Self {
        w.0
    }
}
