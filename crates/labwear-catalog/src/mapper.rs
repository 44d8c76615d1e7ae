//! Conversion between the `Asset` entity and its flat `AssetRecord`.

use labwear_core::asset::{Capability, IncidentLedger};
use labwear_core::constants::DEFAULT_LOCATION;
use labwear_core::errors::{LabError, LabResult};
use labwear_core::models::AssetRecord;
use labwear_core::{Asset, AssetKind, LifecycleState};
use labwear_wear::StrategyRegistry;

/// Location of a record, falling back to the unassigned bucket.
pub fn location_of(record: &AssetRecord) -> &str {
    record
        .location
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(DEFAULT_LOCATION)
}

/// Rebuild an asset, binding it to the registry's shared strategy instance.
pub fn asset_from_record(record: &AssetRecord, registry: &StrategyRegistry) -> LabResult<Asset> {
    let invalid = |reason: String| LabError::InvalidRecord {
        id: record.id.clone(),
        reason,
    };

    if record.id.trim().is_empty() {
        return Err(invalid("empty id".to_string()));
    }
    let kind = AssetKind::from_parts(&record.kind, &record.type_specific_details).map_err(invalid)?;
    let state: LifecycleState = record.state.parse().map_err(|e: LabError| invalid(e.to_string()))?;
    let strategy = registry
        .resolve(&record.strategy_name)
        .map_err(|e| invalid(e.to_string()))?;

    let mut asset = Asset::new(
        record.id.clone(),
        record.model.clone(),
        record.acquisition_date.clone(),
        kind,
        strategy,
    )
    .with_history(state, IncidentLedger::from_entries(record.incidents.clone()));

    if !record.capabilities.is_empty() {
        asset.capabilities = record.capabilities.clone();
    }
    Ok(asset)
}

/// Flatten an asset for storage.
pub fn asset_to_record(location: &str, asset: &Asset) -> AssetRecord {
    let capabilities = if asset.capabilities == Capability::defaults_for(&asset.kind) {
        Default::default()
    } else {
        asset.capabilities.clone()
    };
    AssetRecord {
        id: asset.id().to_string(),
        model: asset.model.clone(),
        kind: asset.kind.name().to_string(),
        acquisition_date: asset.acquisition_date.clone(),
        state: asset.state().as_str().to_string(),
        strategy_name: asset.strategy_name().to_string(),
        location: Some(location.to_string()),
        incidents: asset.incidents().entries().to_vec(),
        type_specific_details: asset.kind.details(),
        capabilities,
    }
}
