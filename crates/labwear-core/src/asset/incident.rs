use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded fault report against an asset.
///
/// Once recorded an incident is never mutated, except for the diagnostic
/// annotation attached through [`PendingIncident`] right after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// UUID v4 identifier.
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub reporter: Option<String>,
    /// Automated diagnostic, e.g. from the darkness heuristic.
    #[serde(default)]
    pub diagnostic: Option<String>,
    /// Reference to the evidence (filename), never the image bytes.
    #[serde(default)]
    pub evidence: Option<String>,
}

impl Incident {
    pub fn new(
        description: impl Into<String>,
        reporter: Option<String>,
        evidence: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            description: description.into(),
            reporter,
            diagnostic: None,
            evidence,
        }
    }
}

/// Append-only, insertion-ordered incident history of one asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentLedger {
    entries: Vec<Incident>,
}

impl IncidentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted entries, keeping their order.
    pub fn from_entries(entries: Vec<Incident>) -> Self {
        Self { entries }
    }

    /// Append an incident. The returned handle is the only way to annotate it.
    pub fn append(&mut self, incident: Incident) -> PendingIncident<'_> {
        self.entries.push(incident);
        let last = self.entries.len() - 1;
        PendingIncident {
            incident: &mut self.entries[last],
        }
    }

    pub fn entries(&self) -> &[Incident] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Incident> {
        self.entries.last()
    }

    pub fn get(&self, id: &str) -> Option<&Incident> {
        self.entries.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Incident> {
        self.entries.iter()
    }
}

/// One-shot handle over a just-appended incident.
///
/// Consuming it closes the annotation window for good.
#[derive(Debug)]
pub struct PendingIncident<'a> {
    incident: &'a mut Incident,
}

impl<'a> PendingIncident<'a> {
    pub fn id(&self) -> &str {
        &self.incident.id
    }

    /// Attach the diagnostic annotation and seal the incident.
    pub fn annotate(self, diagnostic: impl Into<String>) -> &'a Incident {
        self.incident.diagnostic = Some(diagnostic.into());
        self.incident
    }

    /// Seal the incident without an annotation.
    pub fn finish(self) -> &'a Incident {
        self.incident
    }
}
