use labwear_core::errors::{LabError, LabResult};
use labwear_core::models::AssetRecord;
use labwear_core::Asset;
use labwear_wear::StrategyRegistry;

use crate::mapper;

/// Assets grouped by location, locations in first-insertion order.
///
/// Append and update only; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    locations: Vec<(String, Vec<Asset>)>,
}

impl EquipmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from stored records.
    ///
    /// Records that cannot be mapped are returned next to the catalog rather
    /// than dropped.
    pub fn from_records(
        records: &[AssetRecord],
        registry: &StrategyRegistry,
    ) -> (Self, Vec<LabError>) {
        let mut catalog = Self::new();
        let mut rejected = Vec::new();
        for record in records {
            let location = mapper::location_of(record);
            let added = mapper::asset_from_record(record, registry)
                .and_then(|asset| catalog.add_asset(location, asset));
            if let Err(e) = added {
                tracing::warn!(asset_id = %record.id, error = %e, "record rejected");
                rejected.push(e);
            }
        }
        (catalog, rejected)
    }

    /// Every asset as a storage record, in catalog order.
    pub fn to_records(&self) -> Vec<AssetRecord> {
        self.iter()
            .map(|(location, asset)| mapper::asset_to_record(location, asset))
            .collect()
    }

    /// Append an asset, creating the location if needed.
    pub fn add_asset(&mut self, location: &str, asset: Asset) -> LabResult<()> {
        if self.find_by_id(asset.id()).is_some() {
            return Err(LabError::DuplicateAsset {
                id: asset.id().to_string(),
            });
        }
        match self.locations.iter_mut().find(|(name, _)| name == location) {
            Some((_, assets)) => assets.push(asset),
            None => self.locations.push((location.to_string(), vec![asset])),
        }
        Ok(())
    }

    /// Lookup across every location (the QR scan).
    pub fn find_by_id(&self, id: &str) -> Option<&Asset> {
        self.locations
            .iter()
            .flat_map(|(_, assets)| assets.iter())
            .find(|a| a.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Asset> {
        self.locations
            .iter_mut()
            .flat_map(|(_, assets)| assets.iter_mut())
            .find(|a| a.id() == id)
    }

    pub fn location_of(&self, id: &str) -> Option<&str> {
        self.locations
            .iter()
            .find(|(_, assets)| assets.iter().any(|a| a.id() == id))
            .map(|(name, _)| name.as_str())
    }

    /// Assets at `location`; empty when the location is unknown.
    pub fn list_by_location(&self, location: &str) -> &[Asset] {
        self.locations
            .iter()
            .find(|(name, _)| name == location)
            .map(|(_, assets)| assets.as_slice())
            .unwrap_or(&[])
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.locations.iter().map(|(_, assets)| assets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(location, asset)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.locations
            .iter()
            .flat_map(|(name, assets)| assets.iter().map(move |a| (name.as_str(), a)))
    }
}
