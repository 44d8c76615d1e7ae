//! StorageEngine: owns the connection, runs migrations, implements IAssetRepository.

use std::path::Path;

use labwear_core::config::StorageConfig;
use labwear_core::errors::LabResult;
use labwear_core::models::AssetRecord;
use labwear_core::traits::IAssetRepository;

use crate::connection::WriteConnection;
use crate::migrations;
use crate::pragmas;
use crate::queries::{asset_ops, incident_ops};

/// SQLite-backed asset store.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> LabResult<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    /// Open using the configured database path and timeouts.
    pub fn from_config(config: &StorageConfig) -> LabResult<Self> {
        Self::open_with(Path::new(&config.db_path), config)
    }

    fn open_with(path: &Path, config: &StorageConfig) -> LabResult<Self> {
        let engine = Self {
            writer: WriteConnection::open(path, config.busy_timeout_ms)?,
        };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> LabResult<Self> {
        let engine = Self {
            writer: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> LabResult<()> {
        self.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    pub fn schema_version(&self) -> LabResult<u32> {
        self.writer.with_conn(migrations::current_version)
    }

    pub fn foreign_keys_enabled(&self) -> LabResult<bool> {
        self.writer.with_conn(pragmas::foreign_keys_enabled)
    }

    pub fn get(&self, id: &str) -> LabResult<Option<AssetRecord>> {
        self.writer.with_conn(|conn| asset_ops::get_record(conn, id))
    }

    pub fn count(&self) -> LabResult<usize> {
        self.writer.with_conn(asset_ops::count)
    }

    pub fn incident_count(&self, asset_id: &str) -> LabResult<usize> {
        self.writer
            .with_conn(|conn| incident_ops::count_for_asset(conn, asset_id))
    }
}

impl IAssetRepository for StorageEngine {
    fn load_all(&self) -> LabResult<Vec<AssetRecord>> {
        self.writer.with_conn(asset_ops::load_all)
    }

    fn save(&self, record: &AssetRecord) -> LabResult<()> {
        self.writer
            .with_conn(|conn| asset_ops::save_record(conn, record))
    }
}
