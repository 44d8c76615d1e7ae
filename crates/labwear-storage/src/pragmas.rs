//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use labwear_core::errors::LabResult;

use crate::to_storage_err;

/// Apply journaling, durability, and integrity pragmas.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> LabResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA foreign_keys = ON;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Whether foreign key enforcement is active on a connection.
pub fn foreign_keys_enabled(conn: &Connection) -> LabResult<bool> {
    let enabled: i64 = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(enabled == 1)
}
