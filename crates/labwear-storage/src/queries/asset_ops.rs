//! Upsert, get, and list for asset rows.

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::{params, Connection, OptionalExtension, Row};

use labwear_core::asset::Capability;
use labwear_core::errors::LabResult;
use labwear_core::models::AssetRecord;

use crate::queries::incident_ops;
use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT id, model, kind, acquisition_date, state, strategy_name,
        location, details, capabilities FROM assets";

/// Insert or update an asset row and append any incidents not yet stored.
/// Wrapped in a transaction: the row and its incidents are all-or-nothing.
pub fn save_record(conn: &Connection, record: &AssetRecord) -> LabResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("save_record begin: {e}")))?;

    match save_record_inner(&tx, record) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("save_record commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn save_record_inner(conn: &Connection, record: &AssetRecord) -> LabResult<()> {
    let details_json = serde_json::to_string(&record.type_specific_details)?;
    let capabilities_json = serde_json::to_string(&record.capabilities)?;

    conn.execute(
        "INSERT INTO assets (
            id, model, kind, acquisition_date, state, strategy_name,
            location, details, capabilities, position
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9,
            (SELECT COALESCE(MAX(position), 0) + 1 FROM assets)
        )
        ON CONFLICT(id) DO UPDATE SET
            model = excluded.model,
            kind = excluded.kind,
            acquisition_date = excluded.acquisition_date,
            state = excluded.state,
            strategy_name = excluded.strategy_name,
            location = excluded.location,
            details = excluded.details,
            capabilities = excluded.capabilities,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![
            record.id,
            record.model,
            record.kind,
            record.acquisition_date,
            record.state,
            record.strategy_name,
            record.location,
            details_json,
            capabilities_json,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let appended = incident_ops::append_incidents(conn, &record.id, &record.incidents)?;
    tracing::debug!(asset_id = %record.id, appended, "asset saved");
    Ok(())
}

/// Get a single asset with its incidents.
pub fn get_record(conn: &Connection, id: &str) -> LabResult<Option<AssetRecord>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], |row| Ok(row_to_record(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(Ok(mut record)) => {
            record.incidents = incident_ops::load_incidents(conn, &record.id)?;
            Ok(Some(record))
        }
        Some(Err(e)) => Err(e),
        None => Ok(None),
    }
}

/// Every asset in first-insertion order, with incidents.
pub fn load_all(conn: &Connection) -> LabResult<Vec<AssetRecord>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY position"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok(row_to_record(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let mut record = row.map_err(|e| to_storage_err(e.to_string()))??;
        record.incidents = incident_ops::load_incidents(conn, &record.id)?;
        records.push(record);
    }
    Ok(records)
}

pub fn count(conn: &Connection) -> LabResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM assets", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

/// Map a row to a record without incidents. Inner errors are JSON decode failures.
fn row_to_record(row: &Row<'_>) -> LabResult<AssetRecord> {
    let get = |idx: usize| -> LabResult<String> {
        row.get::<_, String>(idx)
            .map_err(|e| to_storage_err(e.to_string()))
    };
    let location: Option<String> = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    let details: BTreeMap<String, serde_json::Value> = serde_json::from_str(&get(7)?)?;
    let capabilities: BTreeSet<Capability> = serde_json::from_str(&get(8)?)?;

    Ok(AssetRecord {
        id: get(0)?,
        model: get(1)?,
        kind: get(2)?,
        acquisition_date: get(3)?,
        state: get(4)?,
        strategy_name: get(5)?,
        location,
        incidents: Vec::new(),
        type_specific_details: details,
        capabilities,
    })
}
