use chrono::NaiveDate;
use labwear_core::asset::{Asset, AssetKind, LifecycleState};
use labwear_core::constants::CRITICAL_OVERRIDE_WEAR;
use labwear_wear::{ConditionBand, ObsolescenceEngine, StrategyRegistry};

fn engine() -> ObsolescenceEngine {
    ObsolescenceEngine::at(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
}

fn motor(registry: &StrategyRegistry) -> Asset {
    Asset::new(
        "MOT-02",
        "WEG W22",
        "2024-05-20",
        AssetKind::InductionMotor {
            horsepower: "10HP".to_string(),
            voltage: "380V".to_string(),
            rpm: 1800,
        },
        registry.linear(),
    )
}

#[test]
fn breakdown_without_incidents() {
    let registry = StrategyRegistry::new();
    let asset = motor(&registry);
    let b = engine().evaluate(&asset);
    assert_eq!(b.strategy, "linear");
    assert!((b.strategy_wear - 0.10).abs() < 1e-9);
    assert!(!b.critical_override);
    assert!((b.effective_wear.value() - 0.10).abs() < 1e-9);
    assert_eq!(b.condition, ConditionBand::Optimal);
}

#[test]
fn breakdown_reports_critical_override() {
    let registry = StrategyRegistry::new();
    let mut asset = motor(&registry);
    asset
        .register_incident("burnt winding", None, None)
        .annotate("carbonized zone detected (40.0% dark area)");

    let b = engine().evaluate(&asset);
    assert!((b.strategy_wear - 0.10).abs() < 1e-9);
    assert!(b.critical_override);
    assert_eq!(b.effective_wear.value(), CRITICAL_OVERRIDE_WEAR);
    assert_eq!(b.condition, ConditionBand::OutOfService);
    assert_eq!(asset.state(), LifecycleState::ReportedFaulty);
}

#[test]
fn batch_keeps_order() {
    let registry = StrategyRegistry::new();
    let a = motor(&registry);
    let b = Asset::new("OSC-02", "Keysight EDU", "2021-11-10", AssetKind::Generic, registry.exponential());
    let results = engine().evaluate_batch([&a, &b]);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].asset_id, "MOT-02");
    assert_eq!(results[1].asset_id, "OSC-02");
}

#[test]
fn forecast_requires_predictive_capability() {
    let registry = StrategyRegistry::new();
    let asset = motor(&registry);
    let now = engine().wear(&asset);
    let later = engine().forecast(&asset, 4).unwrap();
    assert!(later.value() > now.value());
    assert!((later.value() - 0.30).abs() < 1e-9);

    let scope = Asset::new(
        "OSC-01",
        "Tektronix TBS",
        "2019-05-20",
        AssetKind::Oscilloscope {
            bandwidth: "100MHz".to_string(),
        },
        registry.exponential(),
    );
    assert!(engine().forecast(&scope, 4).is_none());
}
