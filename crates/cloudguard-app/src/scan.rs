//! The `scan` use case: evaluate compliance rules and produce a report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use cloudguard_catalog::RuleSource;
use cloudguard_domain::report::{IssueCounts, aggregate};
use cloudguard_provider::ResourceProvider;
use cloudguard_settings::{Overrides, ResolvedConfig};
use cloudguard_types::{Report, ResourceKind};
use time::OffsetDateTime;

/// Input for the scan use case.
pub struct ScanInput<'a> {
    /// Resource kind to scan.
    pub kind: ResourceKind,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Source of already-resolved resource descriptors.
    pub provider: &'a dyn ResourceProvider,
}

/// Output from the scan use case.
///
/// The report stays valid in memory whatever happens to persistence; callers
/// decide when (and whether) to write it.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: Report,
    pub resolved_config: ResolvedConfig,
}

/// Run the scan use case: resolve config, enumerate descriptors, evaluate
/// rules, aggregate the report.
///
/// The only error paths are config resolution and wholesale descriptor
/// enumeration; per-attribute retrieval failures arrive inside descriptors
/// and surface as diagnostics in the report instead.
pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let scanned_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        cloudguard_settings::CloudguardConfigV1::default()
    } else {
        cloudguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        cloudguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    // Informational: documents the rules for operators. The executing rule
    // set is the resolved static one regardless of what the catalog returns.
    let source = match &resolved.catalog_url {
        Some(url) => RuleSource::Remote { url: url.clone() },
        None => RuleSource::Static,
    };
    let catalog = cloudguard_catalog::load(&source);
    tracing::info!(kind = %input.kind, rules = catalog.len(), "loaded rule catalog");

    let descriptors = input
        .provider
        .list_descriptors(input.kind)
        .with_context(|| format!("enumerate {} descriptors", input.kind))?;
    tracing::info!(kind = %input.kind, resources = descriptors.len(), "starting compliance evaluation");

    let findings = cloudguard_domain::evaluate(&descriptors, &resolved.effective);
    let report = aggregate(input.kind, scanned_at, findings);

    let counts = IssueCounts::from_findings(&report.findings);
    tracing::info!(
        flagged = report.findings.len(),
        violations = counts.violations,
        retrieval_failures = counts.retrieval_failures,
        "evaluation complete"
    );

    Ok(ScanOutput {
        report,
        resolved_config: resolved,
    })
}

/// Default per-kind report path under the configured report directory.
pub fn default_report_path(report_dir: &Utf8Path, kind: ResourceKind) -> Utf8PathBuf {
    report_dir.join(format!("{kind}_compliance_report.json"))
}
