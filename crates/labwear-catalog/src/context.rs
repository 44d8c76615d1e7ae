//! LabContext: the explicit application context every front end talks to.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use labwear_core::constants::GENERATED_ID_PREFIX;
use labwear_core::errors::{LabError, LabResult};
use labwear_core::models::{AssetRecord, DegradationEvent};
use labwear_core::traits::{IAssetRepository, IVisualInspector};
use labwear_core::{Asset, AssetKind, Capability, LabConfig};
use labwear_observability::tracing_setup::events;
use labwear_observability::{inspection_span, obsolescence_span, storage_span};
use labwear_observability::{DegradationTracker, TrackedDegradation};
use labwear_vision::DarknessHeuristic;
use labwear_wear::elapsed::parse_acquisition_date;
use labwear_wear::{ObsolescenceEngine, StrategyRegistry};

use crate::catalog::EquipmentCatalog;
use crate::fixtures;
use crate::inspection::{IncidentReport, InspectionOutcome};
use crate::mapper;
use crate::report::{AssetReport, LocationSummary, ScanResult};

const STORAGE_COMPONENT: &str = "storage";
const VISION_COMPONENT: &str = "vision";
const CATALOG_COMPONENT: &str = "catalog";

/// An asset to be registered.
#[derive(Debug, Clone)]
pub struct NewAsset {
    /// Generated as `EQ-XXXXXXXX` when absent.
    pub id: Option<String>,
    pub model: String,
    pub acquisition_date: String,
    pub kind: AssetKind,
    /// Registry default when absent.
    pub strategy: Option<String>,
}

/// Builder for [`LabContext`].
pub struct LabContextBuilder {
    config: LabConfig,
    repository: Option<Arc<dyn IAssetRepository>>,
    inspector: Option<Arc<dyn IVisualInspector>>,
    as_of: Option<NaiveDate>,
}

impl LabContextBuilder {
    pub fn repository(mut self, repository: Arc<dyn IAssetRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn inspector(mut self, inspector: Arc<dyn IVisualInspector>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// Pin the evaluation date instead of using today.
    pub fn as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Load the catalog from the repository.
    ///
    /// An empty (or absent) store is seeded with the built-in fleet, which is
    /// written back so later saves keep the same order.
    pub fn load(self) -> LabResult<LabContext> {
        let stored = match &self.repository {
            Some(repo) => repo.load_all()?,
            None => Vec::new(),
        };
        if stored.is_empty() {
            tracing::info!("no stored assets, seeding built-in fleet");
            let seed = fixtures::seed_records()?;
            if let Some(repo) = &self.repository {
                for record in &seed {
                    repo.save(record)?;
                }
            }
            return self.finish(&seed);
        }
        self.finish(&stored)
    }

    /// Start from the built-in fleet without reading the repository.
    pub fn with_fixtures(self) -> LabResult<LabContext> {
        let seed = fixtures::seed_records()?;
        self.finish(&seed)
    }

    fn finish(self, records: &[AssetRecord]) -> LabResult<LabContext> {
        let registry = StrategyRegistry::from_config(&self.config.wear)?;
        let (catalog, rejected) = EquipmentCatalog::from_records(records, &registry);

        let mut degradation =
            DegradationTracker::with_capacity(self.config.observability.max_tracked_degradations);
        for error in &rejected {
            degradation.record(DegradationEvent::new(
                CATALOG_COMPONENT,
                error.to_string(),
                "record skipped",
            ));
        }

        let inspector = self.inspector.unwrap_or_else(|| {
            Arc::new(DarknessHeuristic::from_config(&self.config.vision)) as Arc<dyn IVisualInspector>
        });

        tracing::info!(
            assets = catalog.len(),
            rejected = rejected.len(),
            persistent = self.repository.is_some(),
            "lab context ready"
        );

        Ok(LabContext {
            config: self.config,
            registry,
            catalog: Mutex::new(catalog),
            repository: self.repository,
            inspector,
            degradation: Mutex::new(degradation),
            as_of: self.as_of,
        })
    }
}

/// Owns the catalog and runs every operation against it.
///
/// Each mutating operation holds the catalog lock from lookup to persistence,
/// so concurrent callers never observe a half-applied change. A failed save
/// restores the asset to its state before the operation.
pub struct LabContext {
    config: LabConfig,
    registry: StrategyRegistry,
    catalog: Mutex<EquipmentCatalog>,
    repository: Option<Arc<dyn IAssetRepository>>,
    inspector: Arc<dyn IVisualInspector>,
    degradation: Mutex<DegradationTracker>,
    as_of: Option<NaiveDate>,
}

impl LabContext {
    pub fn builder(config: LabConfig) -> LabContextBuilder {
        LabContextBuilder {
            config,
            repository: None,
            inspector: None,
            as_of: None,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Engine pinned to the context's evaluation date.
    pub fn engine(&self) -> ObsolescenceEngine {
        self.as_of
            .map_or_else(ObsolescenceEngine::new, ObsolescenceEngine::at)
    }

    /// File a fault report: validate, analyze evidence, register, annotate,
    /// escalate, persist.
    ///
    /// Evidence for an asset without [`Capability::VisualInspection`] is kept
    /// by reference only: no analysis, diagnostic, or escalation.
    pub fn report_incident(&self, report: IncidentReport) -> LabResult<InspectionOutcome> {
        let span = inspection_span!(report.asset_id, report.evidence.is_some());
        let _guard = span.enter();

        let description = report.description.trim();
        if self.config.inspection.require_description && description.is_empty() {
            return Err(LabError::ValidationError(
                "incident description must not be empty".to_string(),
            ));
        }

        // Existence and capability are checked up front so a photo is only
        // decoded for an asset that will accept it. Decoding itself happens
        // outside the catalog lock.
        let inspectable = {
            let catalog = self.lock_catalog()?;
            let asset = catalog
                .find_by_id(&report.asset_id)
                .ok_or_else(|| not_found(&report.asset_id))?;
            asset.has_capability(Capability::VisualInspection)
        };
        if report.evidence.is_some() && !inspectable {
            tracing::info!(
                asset_id = %report.asset_id,
                "asset has no visual inspection capability, evidence stored unanalyzed"
            );
        }
        let vision = report
            .evidence
            .as_ref()
            .filter(|_| inspectable)
            .map(|evidence| self.inspector.inspect(&evidence.bytes));
        if let Some(v) = vision.as_ref().filter(|v| v.is_unreadable()) {
            self.record_degradation(DegradationEvent::new(
                VISION_COMPONENT,
                v.diagnosis.clone(),
                "incident stored without classification",
            ));
        }

        let escalation_target = self.config.inspection.severe_escalation.target_state();
        let as_of = self.engine().as_of();
        let evidence_ref = report.evidence.as_ref().map(|e| e.reference.clone());
        let evidence_attached = evidence_ref.is_some();

        self.mutate_asset(&report.asset_id, |asset| {
            let previous_state = asset.state();
            let pending =
                asset.register_incident(description, report.reporter.clone(), evidence_ref);
            let incident_id = pending.id().to_string();
            let diagnostic = vision.as_ref().map(|v| v.diagnosis.clone());
            match &diagnostic {
                Some(text) => {
                    pending.annotate(text.as_str());
                }
                None => {
                    pending.finish();
                }
            }
            events::incident_registered(asset.id(), &incident_id, evidence_attached);

            let escalated = vision.as_ref().is_some_and(|v| v.severe)
                && asset.escalate_severe(escalation_target).is_some();
            if asset.state() != previous_state {
                events::state_transitioned(
                    asset.id(),
                    previous_state.as_str(),
                    asset.state().as_str(),
                );
            }

            let critical_override = asset.critical_override_active();
            if critical_override {
                events::critical_override_applied(
                    asset.id(),
                    asset.strategy_wear_at(as_of),
                    asset.compute_obsolescence_at(as_of),
                );
            }

            Ok(InspectionOutcome {
                asset_id: asset.id().to_string(),
                incident_id,
                previous_state,
                state: asset.state(),
                diagnostic,
                vision: vision.clone(),
                escalated,
                critical_override,
            })
        })
    }

    /// Switch an asset to another wear formula.
    pub fn change_strategy(&self, id: &str, strategy_name: &str) -> LabResult<()> {
        let strategy = self.registry.resolve(strategy_name)?;
        self.mutate_asset(id, |asset| {
            let from = asset.strategy_name();
            asset.change_strategy(strategy);
            events::strategy_changed(asset.id(), from, asset.strategy_name());
            Ok(())
        })
    }

    /// Retire an asset. Fails with `InvalidTransition` if it already is.
    pub fn decommission(&self, id: &str) -> LabResult<()> {
        self.mutate_asset(id, |asset| {
            let from = asset.state();
            asset.decommission()?;
            events::state_transitioned(asset.id(), from.as_str(), asset.state().as_str());
            Ok(())
        })
    }

    /// Add a new operational asset at `location`. Returns its id.
    pub fn register_asset(&self, location: &str, new: NewAsset) -> LabResult<String> {
        let location = location.trim();
        if location.is_empty() {
            return Err(LabError::ValidationError("location must not be empty".to_string()));
        }
        if new.model.trim().is_empty() {
            return Err(LabError::ValidationError("model must not be empty".to_string()));
        }
        if parse_acquisition_date(&new.acquisition_date).is_none() {
            return Err(LabError::ValidationError(format!(
                "acquisition date '{}' is not YYYY-MM-DD",
                new.acquisition_date
            )));
        }
        let strategy = match new.strategy.as_deref() {
            Some(name) => self.registry.resolve(name)?,
            None => self.registry.default_strategy(),
        };
        let id = new
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id);

        let asset = Asset::new(
            id.clone(),
            new.model.trim(),
            new.acquisition_date.trim(),
            new.kind,
            strategy,
        );

        let mut catalog = self.lock_catalog()?;
        if catalog.find_by_id(&id).is_some() {
            return Err(LabError::DuplicateAsset { id });
        }
        // Store first: a failed save leaves the catalog untouched.
        self.persist(location, &asset)?;
        catalog.add_asset(location, asset)?;
        tracing::info!(asset_id = %id, location, "asset registered");
        Ok(id)
    }

    /// QR lookup.
    pub fn scan(&self, id: &str) -> LabResult<ScanResult> {
        let catalog = self.lock_catalog()?;
        let (location, asset) = locate(&catalog, id)?;
        Ok(ScanResult::build(location, asset, &self.engine()))
    }

    pub fn asset_report(&self, id: &str) -> LabResult<AssetReport> {
        let catalog = self.lock_catalog()?;
        let (location, asset) = locate(&catalog, id)?;
        Ok(AssetReport::build(location, asset, &self.engine()))
    }

    /// Reports for every asset, optionally limited to one location.
    pub fn asset_reports(&self, location: Option<&str>) -> LabResult<Vec<AssetReport>> {
        let catalog = self.lock_catalog()?;
        let engine = self.engine();
        let _guard = obsolescence_span!(catalog.len()).entered();
        Ok(catalog
            .iter()
            .filter(|(loc, _)| location.map_or(true, |wanted| *loc == wanted))
            .map(|(loc, asset)| AssetReport::build(loc, asset, &engine))
            .collect())
    }

    /// One summary per location, in catalog order.
    pub fn fleet_summary(&self) -> LabResult<Vec<LocationSummary>> {
        let catalog = self.lock_catalog()?;
        let engine = self.engine();
        let _guard = obsolescence_span!(catalog.len()).entered();
        Ok(catalog
            .locations()
            .map(|loc| LocationSummary::build(loc, catalog.list_by_location(loc), &engine))
            .collect())
    }

    /// Snapshot of one asset.
    pub fn find(&self, id: &str) -> LabResult<Option<Asset>> {
        Ok(self.lock_catalog()?.find_by_id(id).cloned())
    }

    pub fn locations(&self) -> LabResult<Vec<String>> {
        Ok(self.lock_catalog()?.locations().map(str::to_string).collect())
    }

    pub fn asset_count(&self) -> LabResult<usize> {
        Ok(self.lock_catalog()?.len())
    }

    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker().events().to_vec()
    }

    /// Degradations not yet recovered, oldest first.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker()
            .active_degradations()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Apply `op` to one asset and persist it, restoring the asset if the
    /// save fails. `op` must leave the asset untouched when it errors.
    fn mutate_asset<T>(
        &self,
        id: &str,
        op: impl FnOnce(&mut Asset) -> LabResult<T>,
    ) -> LabResult<T> {
        let mut catalog = self.lock_catalog()?;
        let location = catalog
            .location_of(id)
            .map(str::to_string)
            .ok_or_else(|| not_found(id))?;
        let asset = catalog.find_by_id_mut(id).ok_or_else(|| not_found(id))?;

        let snapshot = asset.clone();
        let value = op(&mut *asset)?;
        if let Err(e) = self.persist(&location, asset) {
            *asset = snapshot;
            return Err(e);
        }
        Ok(value)
    }

    fn persist(&self, location: &str, asset: &Asset) -> LabResult<()> {
        let Some(repo) = &self.repository else {
            return Ok(());
        };
        let _guard = storage_span!("save", asset.id()).entered();
        match repo.save(&mapper::asset_to_record(location, asset)) {
            Ok(()) => {
                self.tracker().mark_recovered(STORAGE_COMPONENT);
                Ok(())
            }
            Err(source) => {
                events::persistence_failed(asset.id(), &source.to_string());
                self.record_degradation(DegradationEvent::new(
                    STORAGE_COMPONENT,
                    source.to_string(),
                    "in-memory change rolled back",
                ));
                Err(LabError::PersistenceFailed {
                    id: asset.id().to_string(),
                    source: Box::new(source),
                })
            }
        }
    }

    fn lock_catalog(&self) -> LabResult<MutexGuard<'_, EquipmentCatalog>> {
        self.catalog
            .lock()
            .map_err(|e| LabError::ConcurrencyError(format!("catalog lock poisoned: {e}")))
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.degradation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn record_degradation(&self, event: DegradationEvent) {
        self.tracker().record(event);
    }
}

fn locate<'a>(catalog: &'a EquipmentCatalog, id: &str) -> LabResult<(&'a str, &'a Asset)> {
    let location = catalog.location_of(id).ok_or_else(|| not_found(id))?;
    let asset = catalog.find_by_id(id).ok_or_else(|| not_found(id))?;
    Ok((location, asset))
}

fn not_found(id: &str) -> LabError {
    LabError::AssetNotFound { id: id.to_string() }
}

fn generate_id() -> String {
    let hex: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    format!("{GENERATED_ID_PREFIX}{}", hex.to_ascii_uppercase())
}

impl std::fmt::Debug for LabContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabContext")
            .field("as_of", &self.as_of)
            .field("persistent", &self.repository.is_some())
            .finish_non_exhaustive()
    }
}
