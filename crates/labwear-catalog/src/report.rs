//! Data snapshots handed to report renderers. No layout lives here.

use serde::Serialize;

use labwear_core::{Asset, Incident, LifecycleState};
use labwear_wear::{ConditionBand, ObsolescenceEngine};

/// Everything a technical sheet needs for one asset.
#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub id: String,
    pub model: String,
    pub kind: String,
    pub location: String,
    pub acquisition_date: String,
    pub state: LifecycleState,
    pub strategy: String,
    /// Effective wear, rounded to two decimals.
    pub wear: f64,
    pub remaining_life: f64,
    pub critical_override: bool,
    pub condition: ConditionBand,
    pub note: String,
    pub qr_label: Option<String>,
    /// Wear one year ahead, for assets that support predictive analysis.
    pub forecast_next_year: Option<f64>,
    pub incidents: Vec<Incident>,
}

impl AssetReport {
    pub fn build(location: &str, asset: &Asset, engine: &ObsolescenceEngine) -> Self {
        let breakdown = engine.evaluate(asset);
        Self {
            id: asset.id().to_string(),
            model: asset.model.clone(),
            kind: asset.kind.label().to_string(),
            location: location.to_string(),
            acquisition_date: asset.acquisition_date.clone(),
            state: asset.state(),
            strategy: breakdown.strategy.to_string(),
            wear: breakdown.effective_wear.rounded(),
            remaining_life: breakdown.effective_wear.remaining_life(),
            critical_override: breakdown.critical_override,
            condition: breakdown.condition,
            note: breakdown.condition.note().to_string(),
            qr_label: asset.qr_label(),
            forecast_next_year: engine.forecast(asset, 1).map(|w| w.rounded()),
            incidents: asset.incidents().entries().to_vec(),
        }
    }
}

/// Per-location roll-up for the fleet overview.
#[derive(Debug, Clone, Serialize)]
pub struct LocationSummary {
    pub location: String,
    pub total: usize,
    pub in_alert: usize,
    pub average_wear: f64,
}

impl LocationSummary {
    pub fn build(location: &str, assets: &[Asset], engine: &ObsolescenceEngine) -> Self {
        let breakdowns = engine.evaluate_batch(assets);
        let in_alert = breakdowns.iter().filter(|b| b.condition.is_alert()).count();
        let average_wear = if breakdowns.is_empty() {
            0.0
        } else {
            breakdowns
                .iter()
                .map(|b| b.effective_wear.value())
                .sum::<f64>()
                / breakdowns.len() as f64
        };
        Self {
            location: location.to_string(),
            total: assets.len(),
            in_alert,
            average_wear,
        }
    }
}

/// What a QR scan shows before the report form.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub id: String,
    pub model: String,
    pub kind: String,
    pub location: String,
    pub state: LifecycleState,
    pub remaining_life: f64,
    pub qr_label: Option<String>,
}

impl ScanResult {
    pub fn build(location: &str, asset: &Asset, engine: &ObsolescenceEngine) -> Self {
        Self {
            id: asset.id().to_string(),
            model: asset.model.clone(),
            kind: asset.kind.label().to_string(),
            location: location.to_string(),
            state: asset.state(),
            remaining_life: engine.wear(asset).remaining_life(),
            qr_label: asset.qr_label(),
        }
    }
}
