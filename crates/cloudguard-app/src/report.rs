//! Report document serialization and persistence.

use anyhow::Context;
use camino::Utf8Path;
use cloudguard_types::{Report, ReportEntry};

/// Serialize the wire document: a top-level array of
/// `{ "resourceId", "issues" }` elements, non-compliant resources only.
pub fn serialize_report(report: &Report) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(&report.entries()).context("serialize report")
}

/// Parse a persisted report document back into its entries.
pub fn parse_report_document(text: &str) -> anyhow::Result<Vec<ReportEntry>> {
    serde_json::from_str(text).context("parse report document")
}

/// Persist the report, creating missing parent directories first.
///
/// The write goes to a temporary file in the destination directory followed
/// by a rename, so an interrupted run leaves either no report file or the
/// previous intact one, never a truncated document.
pub fn write_report_file(path: &Utf8Path, report: &Report) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;

    let data = serialize_report(report)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &data).with_context(|| format!("write report: {tmp}"))?;
    std::fs::rename(&tmp, path).with_context(|| format!("replace report: {path}"))?;
    Ok(())
}
