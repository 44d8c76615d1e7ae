//! v001: assets.

use rusqlite::Connection;

use labwear_core::errors::LabResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LabResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS assets (
            id                TEXT PRIMARY KEY,
            model             TEXT NOT NULL,
            kind              TEXT NOT NULL,
            acquisition_date  TEXT NOT NULL,
            state             TEXT NOT NULL,
            strategy_name     TEXT NOT NULL,
            location          TEXT,
            details           TEXT NOT NULL DEFAULT '{}',
            capabilities      TEXT NOT NULL DEFAULT '[]',
            position          INTEGER NOT NULL,
            updated_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_assets_location ON assets(location);
        CREATE INDEX IF NOT EXISTS idx_assets_position ON assets(position);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
