use crate::errors::LabResult;
use crate::models::AssetRecord;

/// Persistence collaborator: flat records in, flat records out.
pub trait IAssetRepository: Send + Sync {
    /// Load every stored asset.
    fn load_all(&self) -> LabResult<Vec<AssetRecord>>;

    /// Insert or update one asset together with its incident history.
    fn save(&self, record: &AssetRecord) -> LabResult<()>;
}
