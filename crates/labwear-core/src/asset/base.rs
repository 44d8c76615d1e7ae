use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use super::capability::Capability;
use super::incident::{Incident, IncidentLedger, PendingIncident};
use super::kind::AssetKind;
use super::lifecycle::LifecycleState;
use super::obsolescence;
use crate::constants::QR_LABEL_PREFIX;
use crate::errors::{LabError, LabResult};
use crate::traits::IWearStrategy;

/// A tracked piece of laboratory equipment.
///
/// Wear is fully delegated to the shared strategy; the kind never changes it.
#[derive(Clone)]
pub struct Asset {
    id: String,
    pub model: String,
    /// ISO `YYYY-MM-DD`. Kept as text so a malformed value still round-trips.
    pub acquisition_date: String,
    pub kind: AssetKind,
    pub capabilities: BTreeSet<Capability>,
    state: LifecycleState,
    ledger: IncidentLedger,
    strategy: Arc<dyn IWearStrategy>,
}

impl Asset {
    /// A new operational asset with an empty ledger and the kind's default capabilities.
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        acquisition_date: impl Into<String>,
        kind: AssetKind,
        strategy: Arc<dyn IWearStrategy>,
    ) -> Self {
        let capabilities = Capability::defaults_for(&kind);
        Self {
            id: id.into(),
            model: model.into(),
            acquisition_date: acquisition_date.into(),
            kind,
            capabilities,
            state: LifecycleState::Operational,
            ledger: IncidentLedger::new(),
            strategy,
        }
    }

    /// Restore persisted state and history onto a freshly built asset.
    pub fn with_history(mut self, state: LifecycleState, ledger: IncidentLedger) -> Self {
        self.state = state;
        self.ledger = ledger;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn incidents(&self) -> &IncidentLedger {
        &self.ledger
    }

    pub fn strategy(&self) -> &Arc<dyn IWearStrategy> {
        &self.strategy
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Swap the wear formula. Nothing is cached, so the next computation uses it.
    pub fn change_strategy(&mut self, strategy: Arc<dyn IWearStrategy>) {
        tracing::debug!(
            asset_id = %self.id,
            from = self.strategy.name(),
            to = strategy.name(),
            "wear strategy changed"
        );
        self.strategy = strategy;
    }

    /// Raw strategy output as of `as_of`, before the critical override.
    pub fn strategy_wear_at(&self, as_of: NaiveDate) -> f64 {
        self.strategy.calculate_at(&self.acquisition_date, as_of)
    }

    /// Whether the latest incident carries a critical diagnostic.
    pub fn critical_override_active(&self) -> bool {
        self.ledger
            .latest()
            .and_then(|i| i.diagnostic.as_deref())
            .is_some_and(obsolescence::is_critical_annotation)
    }

    /// Effective obsolescence index as of `as_of`.
    pub fn compute_obsolescence_at(&self, as_of: NaiveDate) -> f64 {
        obsolescence::effective_wear(self.strategy_wear_at(as_of), self.ledger.latest())
    }

    /// Effective obsolescence index as of today (UTC).
    pub fn compute_obsolescence(&self) -> f64 {
        self.compute_obsolescence_at(Utc::now().date_naive())
    }

    /// Record a fault report.
    ///
    /// The first report moves an operational asset to `ReportedFaulty`; in any
    /// other state the ledger grows but the state is left alone. The returned
    /// handle is the single window for attaching a diagnostic.
    pub fn register_incident(
        &mut self,
        description: impl Into<String>,
        reporter: Option<String>,
        evidence: Option<String>,
    ) -> PendingIncident<'_> {
        if self.state == LifecycleState::Operational {
            self.state = LifecycleState::ReportedFaulty;
            tracing::info!(
                asset_id = %self.id,
                to = %self.state,
                "asset reported faulty"
            );
        }
        self.ledger
            .append(Incident::new(description, reporter, evidence))
    }

    /// Move to `next`, rejecting anything the lifecycle does not allow.
    pub fn transition_to(&mut self, next: LifecycleState) -> LabResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(LabError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::info!(asset_id = %self.id, from = %self.state, to = %next, "lifecycle transition");
        self.state = next;
        Ok(())
    }

    /// Escalate after a severe diagnosis. Returns the new state when one was taken.
    ///
    /// Only faulty or in-maintenance assets escalate; anything else is left as is.
    pub fn escalate_severe(&mut self, target: LifecycleState) -> Option<LifecycleState> {
        if self.state == LifecycleState::Operational || !self.state.can_transition_to(target) {
            return None;
        }
        self.transition_to(target).ok()?;
        Some(self.state)
    }

    pub fn decommission(&mut self) -> LabResult<()> {
        self.transition_to(LifecycleState::Decommissioned)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Printable QR label, for QR-identifiable assets only.
    pub fn qr_label(&self) -> Option<String> {
        self.has_capability(Capability::QrIdentifiable)
            .then(|| format!("{QR_LABEL_PREFIX}{}", self.id))
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset")
            .field("id", &self.id)
            .field("model", &self.model)
            .field("acquisition_date", &self.acquisition_date)
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("strategy", &self.strategy.name())
            .field("incidents", &self.ledger.len())
            .finish()
    }
}

/// Identity equality: two assets are equal if they have the same id.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
