// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "labwear.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Wear ---
pub const DEFAULT_STRATEGY: &str = "linear";

// --- Vision ---
pub const DEFAULT_DARK_THRESHOLD: u8 = 60;
pub const DEFAULT_SEVERE_AREA_PERCENT: f64 = 10.0;

// --- Inspection ---
pub const DEFAULT_REQUIRE_DESCRIPTION: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_MAX_TRACKED_DEGRADATIONS: usize = 256;
