mod storage_error;

pub use storage_error::StorageError;

use crate::asset::LifecycleState;

/// Result alias used across the workspace.
pub type LabResult<T> = Result<T, LabError>;

/// Top-level error for every labwear subsystem.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    #[error("asset not found: {id}")]
    AssetNotFound { id: String },

    #[error("duplicate asset id: {id}")]
    DuplicateAsset { id: String },

    #[error("invalid lifecycle transition {from} -> {to}")]
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },

    #[error("unknown lifecycle state: {value}")]
    UnknownState { value: String },

    #[error("unknown wear strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("invalid asset record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("persistence failed for asset {id}: {source}")]
    PersistenceFailed {
        id: String,
        #[source]
        source: Box<LabError>,
    },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}
