use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use labwear_catalog::{Evidence, IncidentReport, LabContext, NewAsset};
use labwear_core::{AssetKind, LabConfig};
use labwear_storage::StorageEngine;

#[derive(Debug, Args)]
pub struct ReportIncidentArgs {
    pub id: String,

    /// What is wrong with the equipment
    #[arg(long)]
    pub description: String,

    /// Name or code of the person reporting
    #[arg(long)]
    pub reporter: Option<String>,

    /// Photo of the damage (PNG or JPEG)
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub model: String,

    /// Acquisition date, YYYY-MM-DD
    #[arg(long)]
    pub acquired: String,

    /// Explicit id; generated when omitted
    #[arg(long)]
    pub id: Option<String>,

    /// Wear formula; configured default when omitted
    #[arg(long)]
    pub strategy: Option<String>,

    #[command(flatten)]
    pub kind: KindArgs,
}

/// Kind and its type-specific attributes.
#[derive(Debug, Args)]
pub struct KindArgs {
    /// oscilloscope, multimeter, induction_motor, or generic
    #[arg(long = "kind", default_value = "generic")]
    pub name: String,

    #[arg(long)]
    pub bandwidth: Option<String>,

    #[arg(long)]
    pub precision: Option<String>,

    /// Multimeter is analog rather than digital
    #[arg(long)]
    pub analog: bool,

    #[arg(long)]
    pub horsepower: Option<String>,

    #[arg(long)]
    pub voltage: Option<String>,

    #[arg(long)]
    pub rpm: Option<u32>,
}

impl KindArgs {
    fn to_kind(&self) -> anyhow::Result<AssetKind> {
        let mut details = BTreeMap::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(v) = value {
                details.insert(key.to_string(), v);
            }
        };
        put("bandwidth", self.bandwidth.clone().map(Value::from));
        put("precision", self.precision.clone().map(Value::from));
        put("digital", Some(Value::from(!self.analog)));
        put("horsepower", self.horsepower.clone().map(Value::from));
        put("voltage", self.voltage.clone().map(Value::from));
        put("rpm", self.rpm.map(Value::from));

        AssetKind::from_parts(&self.name, &details)
            .map_err(|reason| anyhow::anyhow!("invalid --kind {}: {reason}", self.name))
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LabConfig> {
    match path {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(LabConfig::default()),
    }
}

pub fn open_context(config: LabConfig) -> anyhow::Result<LabContext> {
    let store = StorageEngine::from_config(&config.storage)
        .with_context(|| format!("opening database {}", config.storage.db_path))?;
    LabContext::builder(config)
        .repository(Arc::new(store))
        .load()
        .context("loading equipment catalog")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn list(ctx: &LabContext, location: Option<&str>) -> anyhow::Result<()> {
    let reports = ctx.asset_reports(location)?;
    if let Some(location) = location {
        if reports.is_empty() {
            bail!("no assets at location '{location}'");
        }
    }
    for r in &reports {
        println!(
            "{:<12} {:<24} {:<26} {:<18} wear {:>5.1}%  {:?}",
            r.id,
            r.model,
            r.location,
            r.state.as_str(),
            r.wear * 100.0,
            r.condition
        );
    }
    Ok(())
}

pub fn scan(ctx: &LabContext, id: &str) -> anyhow::Result<()> {
    let scan = ctx.scan(id).with_context(|| format!("QR code {id} not found"))?;
    print_json(&scan)
}

pub fn report_incident(ctx: &LabContext, args: ReportIncidentArgs) -> anyhow::Result<()> {
    let mut report = IncidentReport::new(args.id, args.description);
    if let Some(reporter) = args.reporter {
        report = report.reporter(reporter);
    }
    if let Some(path) = args.image {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("reading image {}", path.display()))?;
        let reference = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        report = report.evidence(Evidence::new(reference, bytes));
    }
    let outcome = ctx.report_incident(report)?;
    if outcome.critical_override {
        eprintln!("critical damage detected, {} moved to {}", outcome.asset_id, outcome.state);
    }
    print_json(&outcome)
}

pub fn set_strategy(ctx: &LabContext, id: &str, strategy: &str) -> anyhow::Result<()> {
    ctx.change_strategy(id, strategy).with_context(|| {
        format!("available strategies: {}", ctx.registry().names().join(", "))
    })?;
    let report = ctx.asset_report(id)?;
    println!("{id}: strategy {}, wear {:.2}", report.strategy, report.wear);
    Ok(())
}

pub fn register(ctx: &LabContext, args: RegisterArgs) -> anyhow::Result<()> {
    let kind = args.kind.to_kind()?;
    let id = ctx.register_asset(
        &args.location,
        NewAsset {
            id: args.id,
            model: args.model,
            acquisition_date: args.acquired,
            kind,
            strategy: args.strategy,
        },
    )?;
    println!("{id}");
    Ok(())
}

pub fn decommission(ctx: &LabContext, id: &str) -> anyhow::Result<()> {
    ctx.decommission(id)?;
    println!("{id}: decommissioned");
    Ok(())
}

pub fn summary(ctx: &LabContext) -> anyhow::Result<()> {
    print_json(&ctx.fleet_summary()?)?;
    for d in ctx.active_degradations() {
        eprintln!(
            "degraded: {} ({}), {}",
            d.event.component, d.event.failure, d.event.fallback_used
        );
    }
    Ok(())
}

pub fn report(ctx: &LabContext, id: &str) -> anyhow::Result<()> {
    print_json(&ctx.asset_report(id)?)
}
