//! Record every degradation event: component, failure mode, fallback used, timestamp, recovery status.

use chrono::{DateTime, Utc};
use labwear_core::config::defaults::DEFAULT_MAX_TRACKED_DEGRADATIONS;
use labwear_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// Back to normal operation.
    Recovered,
}

/// A tracked degradation event with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// In-memory log of degradations, newest last.
///
/// Bounded: past `capacity` the oldest recovered entry is evicted, or the
/// oldest entry outright when none has recovered.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
    capacity: usize,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_TRACKED_DEGRADATIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a new degradation event.
    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        if self.events.len() > self.capacity {
            let evict = self
                .events
                .iter()
                .position(|t| t.recovery_status == RecoveryStatus::Recovered)
                .unwrap_or(0);
            self.events.remove(evict);
        }
    }

    /// Mark every active degradation of `component` as recovered.
    /// Returns how many were closed.
    pub fn mark_recovered(&mut self, component: &str) -> usize {
        let now = Utc::now();
        let mut closed = 0;
        for tracked in self.events.iter_mut().filter(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        }) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
            closed += 1;
        }
        if closed > 0 {
            tracing::info!(component, closed, "component recovered");
        }
        closed
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    /// Active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.events.iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::new()
    }
}
