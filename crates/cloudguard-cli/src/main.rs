//! CLI entry point for cloudguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `cloudguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use cloudguard_app::{
    ExplainOutput, ScanInput, default_report_path, run_explain, run_rules, run_scan,
    write_report_file,
};
use cloudguard_provider::SnapshotProvider;
use cloudguard_settings::Overrides;
use cloudguard_types::ResourceKind;

#[derive(Parser, Debug)]
#[command(
    name = "cloudguard",
    version,
    about = "Compliance scanner for cloud resource inventories"
)]
struct Cli {
    /// Path to cloudguard config TOML.
    #[arg(long, default_value = "cloudguard.toml")]
    config: Utf8PathBuf,

    /// Override the directory reports are written into.
    #[arg(long)]
    report_dir: Option<String>,

    /// Override the remote rule catalog endpoint.
    #[arg(long)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Instance,
    Bucket,
}

impl From<Kind> for ResourceKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Instance => ResourceKind::Instance,
            Kind::Bucket => ResourceKind::Bucket,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate compliance rules against an inventory and write the report.
    Scan {
        /// Resource kind to scan.
        #[arg(long, value_enum)]
        kind: Kind,

        /// Path to the inventory snapshot JSON.
        #[arg(long, default_value = "inventory.json")]
        inventory: Utf8PathBuf,

        /// Where to write the JSON report
        /// (default: <report_dir>/<kind>_compliance_report.json).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id or code.
    Explain {
        /// The rule_id (e.g., "bucket.versioning") or code (e.g.,
        /// "open_ingress") to explain.
        identifier: String,
    },

    /// List known rules with their catalog descriptions.
    Rules,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Scan {
            kind,
            ref inventory,
            ref report_out,
        } => cmd_scan(&cli, kind, inventory.clone(), report_out.clone()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Rules => cmd_rules(&cli),
    }
}

fn cmd_scan(
    cli: &Cli,
    kind: Kind,
    inventory: Utf8PathBuf,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        // Load config if present; a missing file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            report_dir: cli.report_dir.clone(),
            catalog_url: cli.catalog_url.clone(),
        };

        let provider = SnapshotProvider::new(inventory);
        let output = run_scan(ScanInput {
            kind: kind.into(),
            config_text: &cfg_text,
            overrides,
            provider: &provider,
        })?;

        let report_path = report_out.unwrap_or_else(|| {
            default_report_path(&output.resolved_config.report_dir, output.report.kind)
        });
        if let Err(err) = write_report_file(&report_path, &output.report) {
            // The atomic replace never truncates an existing report, so a
            // prior successful run's file is still valid; surface the
            // failure without failing the completed scan.
            if report_path.as_std_path().exists() {
                tracing::warn!(
                    path = %report_path,
                    error = %format!("{err:#}"),
                    "report not replaced; previous report remains on disk"
                );
                return Ok(());
            }
            return Err(err).context("write report json");
        }

        if output.report.findings.is_empty() {
            tracing::info!(path = %report_path, "all scanned resources are compliant");
        } else {
            tracing::info!(
                path = %report_path,
                flagged = output.report.findings.len(),
                "report written"
            );
        }

        Ok(())
    })();

    // A completed scan exits 0 whether or not issues were found; only
    // provider/setup/persistence failures are nonzero.
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("cloudguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(doc) => {
            print!("{}", cloudguard_app::format_explanation(&doc));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                cloudguard_app::format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<()> {
    for entry in run_rules(cli.catalog_url.as_deref()) {
        println!("{}: {}", entry.rule_id, entry.title);
    }
    Ok(())
}
