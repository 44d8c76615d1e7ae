//! v002: incidents (append-only ledger rows).

use rusqlite::Connection;

use labwear_core::errors::LabResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LabResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS incidents (
            id           TEXT PRIMARY KEY,
            asset_id     TEXT NOT NULL REFERENCES assets(id),
            seq          INTEGER NOT NULL,
            timestamp    TEXT NOT NULL,
            description  TEXT NOT NULL,
            reporter     TEXT,
            diagnostic   TEXT,
            evidence     TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_incidents_asset ON incidents(asset_id, seq);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
