use std::sync::Arc;

use chrono::NaiveDate;
use labwear_core::asset::{Asset, AssetKind};
use labwear_core::traits::IWearStrategy;
use labwear_wear::{ExponentialWear, LinearWear, StrategyRegistry};

fn year_2026() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

#[test]
fn linear_five_years_is_a_quarter() {
    let wear = LinearWear.calculate_at("2021-01-01", year_2026());
    assert!((wear - 0.25).abs() < 1e-9, "got {wear}");
}

#[test]
fn exponential_five_years() {
    let wear = ExponentialWear.calculate_at("2021-01-01", year_2026());
    let expected = (std::f64::consts::E - 1.0) / 10.0;
    assert!((wear - expected).abs() < 1e-9, "got {wear}");
    assert!((wear - 0.172).abs() < 0.001);
}

#[test]
fn same_year_acquisition_uses_one_year_floor() {
    let wear = LinearWear.calculate_at("2026-01-01", year_2026());
    assert!((wear - 0.05).abs() < 1e-9);
    let future = LinearWear.calculate_at("2031-01-01", year_2026());
    assert!((future - 0.05).abs() < 1e-9);
}

#[test]
fn linear_saturates_at_one() {
    assert_eq!(LinearWear.calculate_at("1990-01-01", year_2026()), 1.0);
    assert_eq!(LinearWear::wear_for_years(20), 1.0);
}

#[test]
fn exponential_saturates_at_one() {
    // (e^(0.2 * 12) - 1) / 10 ≈ 1.0023
    assert_eq!(ExponentialWear::wear_for_years(12), 1.0);
    assert!(ExponentialWear::wear_for_years(11) < 1.0);
}

#[test]
fn unparseable_date_degrades_to_zero() {
    for bad in ["", "yesterday", "2021", "2021/01/01"] {
        assert_eq!(LinearWear.calculate_at(bad, year_2026()), 0.0);
        assert_eq!(ExponentialWear.calculate_at(bad, year_2026()), 0.0);
    }
}

#[test]
fn same_date_different_strategy_differs() {
    let registry = StrategyRegistry::new();
    let physical = Asset::new(
        "F-001",
        "Industrial motor",
        "2021-01-01",
        AssetKind::Generic,
        registry.linear(),
    );
    let digital = Asset::new(
        "E-999",
        "Data server",
        "2021-01-01",
        AssetKind::Generic,
        registry.exponential(),
    );
    let a = physical.compute_obsolescence_at(year_2026());
    let b = digital.compute_obsolescence_at(year_2026());
    assert_ne!(a, b);
}

#[test]
fn change_strategy_takes_effect_immediately() {
    let registry = StrategyRegistry::new();
    let mut asset = Asset::new(
        "OSC-01",
        "Tektronix TBS",
        "2019-05-20",
        AssetKind::Oscilloscope {
            bandwidth: "100MHz".to_string(),
        },
        registry.linear(),
    );
    let linear = asset.compute_obsolescence_at(year_2026());
    asset.change_strategy(registry.exponential());
    let exponential = asset.compute_obsolescence_at(year_2026());

    assert!((linear - 0.35).abs() < 1e-9);
    assert!((exponential - ((1.4f64).exp() - 1.0) / 10.0).abs() < 1e-9);
}

#[test]
fn strategies_are_shared_across_assets() {
    let registry = StrategyRegistry::new();
    let a = Asset::new("A", "a", "2020-01-01", AssetKind::Generic, registry.linear());
    let b = Asset::new("B", "b", "2020-01-01", AssetKind::Generic, registry.linear());
    assert!(Arc::ptr_eq(a.strategy(), b.strategy()));
}
