//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// Log an incident appended to an asset's ledger.
pub fn incident_registered(asset_id: &str, incident_id: &str, has_evidence: bool) {
    tracing::info!(
        event = "incident_registered",
        asset_id = %asset_id,
        incident_id = %incident_id,
        has_evidence = has_evidence,
        "incident registered"
    );
}

/// Log a lifecycle state change.
pub fn state_transitioned(asset_id: &str, from: &str, to: &str) {
    tracing::info!(
        event = "state_transitioned",
        asset_id = %asset_id,
        from = %from,
        to = %to,
        "lifecycle state changed"
    );
}

/// Log a critical diagnostic pinning an asset's wear.
pub fn critical_override_applied(asset_id: &str, strategy_wear: f64, effective_wear: f64) {
    tracing::warn!(
        event = "critical_override_applied",
        asset_id = %asset_id,
        strategy_wear = strategy_wear,
        effective_wear = effective_wear,
        "critical diagnostic overrides wear"
    );
}

/// Log a wear strategy swap.
pub fn strategy_changed(asset_id: &str, from: &str, to: &str) {
    tracing::info!(
        event = "strategy_changed",
        asset_id = %asset_id,
        from = %from,
        to = %to,
        "wear strategy changed"
    );
}

/// Log a failed save that was rolled back in memory.
pub fn persistence_failed(asset_id: &str, error: &str) {
    tracing::error!(
        event = "persistence_failed",
        asset_id = %asset_id,
        error = %error,
        "persistence failed, in-memory change rolled back"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
