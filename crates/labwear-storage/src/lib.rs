//! # labwear-storage
//!
//! SQLite implementation of the asset persistence collaborator: versioned
//! migrations, upserted asset rows, and an append-only incident table.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::StorageEngine;

use labwear_core::errors::{LabError, StorageError};

/// Wrap a low-level message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> LabError {
    LabError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}
