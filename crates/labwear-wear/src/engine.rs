use chrono::{Months, NaiveDate, Utc};
use serde::Serialize;

use labwear_core::asset::{Asset, Capability, WearIndex};

use crate::condition::ConditionBand;

/// Per-asset evaluation with the strategy output kept apart from the override.
#[derive(Debug, Clone, Serialize)]
pub struct ObsolescenceBreakdown {
    pub asset_id: String,
    pub strategy: &'static str,
    pub strategy_wear: f64,
    pub critical_override: bool,
    pub effective_wear: WearIndex,
    pub condition: ConditionBand,
}

/// Evaluates assets against a fixed reference date.
///
/// Pinning the date keeps a whole batch (one report, one fleet summary)
/// consistent even when it straddles midnight.
#[derive(Debug, Clone, Copy)]
pub struct ObsolescenceEngine {
    as_of: NaiveDate,
}

impl ObsolescenceEngine {
    /// Engine evaluating as of today (UTC).
    pub fn new() -> Self {
        Self::at(Utc::now().date_naive())
    }

    pub fn at(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Effective wear of a single asset.
    pub fn wear(&self, asset: &Asset) -> WearIndex {
        WearIndex::new(asset.compute_obsolescence_at(self.as_of))
    }

    /// Full breakdown of a single asset.
    pub fn evaluate(&self, asset: &Asset) -> ObsolescenceBreakdown {
        let strategy_wear = asset.strategy_wear_at(self.as_of);
        let effective_wear = self.wear(asset);
        ObsolescenceBreakdown {
            asset_id: asset.id().to_string(),
            strategy: asset.strategy_name(),
            strategy_wear,
            critical_override: asset.critical_override_active(),
            effective_wear,
            condition: ConditionBand::assess(effective_wear.value(), asset.state()),
        }
    }

    /// Evaluate every asset in order.
    pub fn evaluate_batch<'a, I>(&self, assets: I) -> Vec<ObsolescenceBreakdown>
    where
        I: IntoIterator<Item = &'a Asset>,
    {
        assets.into_iter().map(|a| self.evaluate(a)).collect()
    }

    /// Projected wear `years_ahead` years after the reference date.
    ///
    /// Only assets with [`Capability::PredictiveAnalysis`] are forecast.
    pub fn forecast(&self, asset: &Asset, years_ahead: u32) -> Option<WearIndex> {
        if !asset.has_capability(Capability::PredictiveAnalysis) {
            return None;
        }
        let horizon = self
            .as_of
            .checked_add_months(Months::new(years_ahead.saturating_mul(12)))?;
        Some(WearIndex::new(asset.compute_obsolescence_at(horizon)))
    }
}

impl Default for ObsolescenceEngine {
    fn default() -> Self {
        Self::new()
    }
}
