//! Span definitions per operation: obsolescence evaluation, inspection, storage.

/// Create an obsolescence evaluation span.
#[macro_export]
macro_rules! obsolescence_span {
    ($asset_count:expr) => {
        tracing::info_span!("labwear.obsolescence", asset_count = $asset_count)
    };
}

/// Create an inspection span for one incident report.
#[macro_export]
macro_rules! inspection_span {
    ($asset_id:expr, $has_evidence:expr) => {
        tracing::info_span!(
            "labwear.inspection",
            asset_id = %$asset_id,
            has_evidence = $has_evidence
        )
    };
}

/// Create a storage span.
#[macro_export]
macro_rules! storage_span {
    ($operation:expr, $asset_id:expr) => {
        tracing::debug_span!("labwear.storage", operation = %$operation, asset_id = %$asset_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const OBSOLESCENCE: &str = "labwear.obsolescence";
    pub const INSPECTION: &str = "labwear.inspection";
    pub const STORAGE: &str = "labwear.storage";
}
