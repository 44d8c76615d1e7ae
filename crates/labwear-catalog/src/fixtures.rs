//! Built-in seed fleet used when no stored data exists.

use labwear_core::errors::LabResult;
use labwear_core::models::AssetRecord;

const SEED_JSON: &str = include_str!("../fixtures/seed.json");

/// The six demo assets spread over three labs.
pub fn seed_records() -> LabResult<Vec<AssetRecord>> {
    Ok(serde_json::from_str(SEED_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EquipmentCatalog;
    use labwear_wear::StrategyRegistry;

    #[test]
    fn seed_maps_cleanly() {
        let records = seed_records().unwrap();
        let (catalog, rejected) = EquipmentCatalog::from_records(&records, &StrategyRegistry::new());
        assert!(rejected.is_empty());
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.locations().collect::<Vec<_>>(),
            vec!["Electrical Machines Lab", "Telecommunications Lab", "Circuits Lab"]
        );
    }
}
