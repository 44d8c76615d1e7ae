use std::sync::Arc;

use chrono::NaiveDate;
use labwear_core::asset::*;
use labwear_core::constants::CRITICAL_OVERRIDE_WEAR;
use labwear_core::traits::IWearStrategy;
use labwear_core::LabError;

/// Strategy returning a fixed value, independent of dates.
#[derive(Debug)]
struct FixedWear(&'static str, f64);

impl IWearStrategy for FixedWear {
    fn name(&self) -> &'static str {
        self.0
    }

    fn calculate_at(&self, _acquisition_date: &str, _as_of: NaiveDate) -> f64 {
        self.1
    }
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn make_asset(wear: f64) -> Asset {
    Asset::new(
        "MOT-01",
        "Siemens 1LE1",
        "2020-01-15",
        AssetKind::InductionMotor {
            horsepower: "15HP".to_string(),
            voltage: "440V".to_string(),
            rpm: 3600,
        },
        Arc::new(FixedWear("fixed", wear)),
    )
}

#[test]
fn new_asset_is_operational_with_empty_ledger() {
    let asset = make_asset(0.1);
    assert_eq!(asset.state(), LifecycleState::Operational);
    assert!(asset.incidents().is_empty());
    assert!(asset.has_capability(Capability::PredictiveAnalysis));
    assert_eq!(asset.qr_label().as_deref(), Some("QR-MOT-01"));
}

#[test]
fn first_incident_reports_faulty_once() {
    let mut asset = make_asset(0.1);
    asset.register_incident("bearing noise", Some("tech-01".to_string()), None).finish();
    assert_eq!(asset.state(), LifecycleState::ReportedFaulty);
    assert_eq!(asset.incidents().len(), 1);

    asset.register_incident("still noisy", None, None).finish();
    assert_eq!(asset.state(), LifecycleState::ReportedFaulty);
    assert_eq!(asset.incidents().len(), 2);
}

#[test]
fn ledger_is_append_only() {
    let mut asset = make_asset(0.1);
    asset
        .register_incident("first", None, None)
        .annotate("within normal parameters (0.0% dark area)");
    let before = asset.incidents().entries()[0].clone();

    asset
        .register_incident("second", None, Some("photo.jpg".to_string()))
        .annotate("carbonized zone detected (42.0% dark area)");

    assert_eq!(asset.incidents().len(), 2);
    assert_eq!(asset.incidents().entries()[0], before);
    assert_eq!(
        asset.incidents().latest().unwrap().evidence.as_deref(),
        Some("photo.jpg")
    );
}

#[test]
fn critical_annotation_overrides_strategy() {
    let mut asset = make_asset(0.10);
    assert!((asset.compute_obsolescence_at(as_of()) - 0.10).abs() < 1e-12);

    asset
        .register_incident("smoke from housing", None, None)
        .annotate("Carbonized zone detected (35.2% dark area)");

    assert!(asset.critical_override_active());
    assert_eq!(asset.compute_obsolescence_at(as_of()), CRITICAL_OVERRIDE_WEAR);
}

#[test]
fn override_follows_the_latest_incident_only() {
    let mut asset = make_asset(0.10);
    asset
        .register_incident("burnt", None, None)
        .annotate("carbonized zone detected");
    asset.register_incident("follow-up", None, None).finish();

    assert!(!asset.critical_override_active());
    assert!((asset.compute_obsolescence_at(as_of()) - 0.10).abs() < 1e-12);
}

#[test]
fn strategy_output_is_capped_at_one() {
    let asset = make_asset(1.7);
    assert_eq!(asset.compute_obsolescence_at(as_of()), 1.0);
}

#[test]
fn changing_strategy_changes_result() {
    let mut asset = make_asset(0.10);
    let before = asset.compute_obsolescence_at(as_of());
    asset.change_strategy(Arc::new(FixedWear("other", 0.40)));
    let after = asset.compute_obsolescence_at(as_of());
    assert_ne!(before, after);
    assert_eq!(asset.strategy_name(), "other");
}

#[test]
fn severe_escalation_from_faulty() {
    let mut asset = make_asset(0.1);
    assert_eq!(asset.escalate_severe(LifecycleState::UnderMaintenance), None);

    asset.register_incident("sparks", None, None).finish();
    assert_eq!(
        asset.escalate_severe(LifecycleState::UnderMaintenance),
        Some(LifecycleState::UnderMaintenance)
    );
    assert_eq!(asset.escalate_severe(LifecycleState::UnderMaintenance), None);
    assert_eq!(
        asset.escalate_severe(LifecycleState::Decommissioned),
        Some(LifecycleState::Decommissioned)
    );
}

#[test]
fn invalid_transition_is_typed_error() {
    let mut asset = make_asset(0.1);
    asset.decommission().unwrap();
    let err = asset.transition_to(LifecycleState::Operational).unwrap_err();
    assert!(matches!(
        err,
        LabError::InvalidTransition {
            from: LifecycleState::Decommissioned,
            to: LifecycleState::Operational
        }
    ));
}

#[test]
fn incident_after_maintenance_keeps_state() {
    let mut asset = make_asset(0.1);
    asset.register_incident("fault", None, None).finish();
    asset.transition_to(LifecycleState::UnderMaintenance).unwrap();
    asset.register_incident("another fault", None, None).finish();
    assert_eq!(asset.state(), LifecycleState::UnderMaintenance);
}

#[test]
fn wear_index_presentation() {
    let w = WearIndex::new(0.1718);
    assert_eq!(w.rounded(), 0.17);
    assert!((w.remaining_life() - 0.8282).abs() < 1e-9);
    assert_eq!(w.to_string(), "17.18%");
    assert_eq!(WearIndex::new(f64::NAN).value(), 0.0);
    assert_eq!(WearIndex::new(3.0).value(), 1.0);
}
