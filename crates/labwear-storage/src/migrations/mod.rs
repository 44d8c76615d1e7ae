//! Versioned schema migrations, applied in order and recorded in `schema_version`.

mod v001_assets;
mod v002_incidents;

use rusqlite::{params, Connection};

use labwear_core::errors::{LabError, LabResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> LabResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_assets::migrate),
    (2, v002_incidents::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> LabResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| {
            LabError::StorageError(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied migration");
    }
    current_version(conn)
}

pub fn current_version(conn: &Connection) -> LabResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
