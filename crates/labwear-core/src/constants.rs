/// labwear version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wear forced onto an asset whose latest diagnostic reports destructive damage.
pub const CRITICAL_OVERRIDE_WEAR: f64 = 0.98;

/// Lowercase markers that flag a diagnostic annotation as critical.
pub const CRITICAL_MARKERS: &[&str] = &["carbonized", "critical"];

/// Elapsed-years floor used by every wear formula.
pub const MIN_ELAPSED_YEARS: i32 = 1;

/// Wear reported when an acquisition date cannot be parsed.
pub const UNPARSEABLE_DATE_WEAR: f64 = 0.0;

/// Acquisition date format (ISO calendar date).
pub const ACQUISITION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Prefix for identifiers generated at registration time.
pub const GENERATED_ID_PREFIX: &str = "EQ-";

/// Prefix of the printable QR label.
pub const QR_LABEL_PREFIX: &str = "QR-";

/// Location assigned to records that carry none.
pub const DEFAULT_LOCATION: &str = "Unassigned";
