//! `labwear` command-line front end.
//!
//! Every command opens the configured SQLite store, loads the catalog
//! (seeding the built-in fleet on first run), and runs one operation.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::{KindArgs, RegisterArgs, ReportIncidentArgs};

/// Laboratory equipment wear and incident tracker
#[derive(Debug, Parser)]
#[command(name = "labwear", version)]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the database path from the configuration.
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List assets with their wear and condition
    List {
        /// Only this location
        #[arg(long)]
        location: Option<String>,
    },

    /// Look up an asset by its QR identifier
    Scan { id: String },

    /// File a fault report, optionally with a photo for visual inspection
    ReportIncident(ReportIncidentArgs),

    /// Switch an asset to another wear formula (linear, exponential)
    SetStrategy { id: String, strategy: String },

    /// Register a new asset
    Register(RegisterArgs),

    /// Retire an asset
    Decommission { id: String },

    /// Per-location fleet overview
    Summary,

    /// Full technical report of one asset
    Report { id: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = commands::load_config(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.storage.db_path = db.display().to_string();
    }
    labwear_observability::init_tracing(&config.observability);
    tracing::debug!(version = labwear_core::constants::VERSION, "labwear starting");

    let ctx = commands::open_context(config)?;
    match cli.command {
        Command::List { location } => commands::list(&ctx, location.as_deref()),
        Command::Scan { id } => commands::scan(&ctx, &id),
        Command::ReportIncident(args) => commands::report_incident(&ctx, args),
        Command::SetStrategy { id, strategy } => commands::set_strategy(&ctx, &id, &strategy),
        Command::Register(args) => commands::register(&ctx, args),
        Command::Decommission { id } => commands::decommission(&ctx, &id),
        Command::Summary => commands::summary(&ctx),
        Command::Report { id } => commands::report(&ctx, &id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_incident() {
        let cli = Cli::try_parse_from([
            "labwear",
            "report-incident",
            "MOT-01",
            "--description",
            "burning smell",
            "--image",
            "photo.jpg",
        ])
        .unwrap();
        match cli.command {
            Command::ReportIncident(args) => {
                assert_eq!(args.id, "MOT-01");
                assert_eq!(args.image, Some(PathBuf::from("photo.jpg")));
                assert!(args.reporter.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_register_with_kind_attributes() {
        let cli = Cli::try_parse_from([
            "labwear",
            "--config",
            "lab.toml",
            "register",
            "--location",
            "Circuits Lab",
            "--kind",
            "multimeter",
            "--model",
            "Fluke 179",
            "--acquired",
            "2024-01-10",
            "--precision",
            "0.09%",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("lab.toml")));
        match cli.command {
            Command::Register(RegisterArgs {
                kind: KindArgs { precision, analog, .. },
                ..
            }) => {
                assert_eq!(precision.as_deref(), Some("0.09%"));
                assert!(!analog);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_description() {
        assert!(Cli::try_parse_from(["labwear", "report-incident", "MOT-01"]).is_err());
    }
}
