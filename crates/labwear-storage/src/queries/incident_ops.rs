//! Append-only incident rows.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use labwear_core::asset::Incident;
use labwear_core::errors::LabResult;

use crate::to_storage_err;

/// Insert incidents that are not stored yet. Existing rows are never touched.
///
/// Returns the number of newly inserted rows.
pub fn append_incidents(conn: &Connection, asset_id: &str, incidents: &[Incident]) -> LabResult<usize> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR IGNORE INTO incidents (
                id, asset_id, seq, timestamp, description, reporter, diagnostic, evidence
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut inserted = 0;
    for (seq, incident) in incidents.iter().enumerate() {
        inserted += stmt
            .execute(params![
                incident.id,
                asset_id,
                seq as i64,
                incident.timestamp.to_rfc3339(),
                incident.description,
                incident.reporter,
                incident.diagnostic,
                incident.evidence,
            ])
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(inserted)
}

/// Load an asset's incidents in ledger order.
pub fn load_incidents(conn: &Connection, asset_id: &str) -> LabResult<Vec<Incident>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, timestamp, description, reporter, diagnostic, evidence
             FROM incidents WHERE asset_id = ?1 ORDER BY seq",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![asset_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut incidents = Vec::new();
    for row in rows {
        let (id, timestamp, description, reporter, diagnostic, evidence) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let timestamp = DateTime::parse_from_rfc3339(&timestamp)
            .map_err(|e| to_storage_err(format!("incident {id} timestamp: {e}")))?
            .with_timezone(&Utc);
        incidents.push(Incident {
            id,
            timestamp,
            description,
            reporter,
            diagnostic,
            evidence,
        });
    }
    Ok(incidents)
}

pub fn count_for_asset(conn: &Connection, asset_id: &str) -> LabResult<usize> {
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM incidents WHERE asset_id = ?1",
            params![asset_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}
