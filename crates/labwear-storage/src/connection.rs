//! The single serialized connection every query goes through.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use labwear_core::errors::{LabError, LabResult, StorageError};

use crate::pragmas::apply_pragmas;
use crate::to_storage_err;

/// One SQLite connection behind a mutex. Single writer, last write wins.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> LabResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> LabResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> LabResult<T>
    where
        F: FnOnce(&Connection) -> LabResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            LabError::StorageError(StorageError::LockPoisoned {
                details: e.to_string(),
            })
        })?;
        f(&guard)
    }
}
