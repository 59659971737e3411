//! End-to-end CLI integration tests using inventory fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - An inventory.json snapshot (and optionally a cloudguard.toml)
//! - An expected.report.json with the expected wire document
//!
//! The report document is fully deterministic, so the comparison is exact.

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the cloudguard binary.
#[allow(deprecated)]
fn cloudguard_cmd() -> Command {
    Command::cargo_bin("cloudguard").expect("cloudguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("cloudguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `scan` against a fixture and return (exit code, report document).
fn run_scan_on_fixture(fixture_name: &str, kind: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = cloudguard_cmd()
        .arg("--config")
        .arg(fixture_path.join("cloudguard.toml"))
        .arg("scan")
        .arg("--kind")
        .arg(kind)
        .arg("--inventory")
        .arg(fixture_path.join("inventory.json"))
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);

    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

/// Load and parse the expected report for a fixture.
fn load_expected_report(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&expected_path).expect("Failed to read expected report");
    serde_json::from_str(&content).expect("Failed to parse expected report")
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_mixed_instances_flags_only_the_offender() {
    let (exit_code, report) = run_scan_on_fixture("mixed_instances", "instance");
    let expected = load_expected_report("mixed_instances");

    // Findings do not affect the exit code; the scan itself completed.
    assert_eq!(exit_code, 0, "scan with findings should still exit 0");
    assert_eq!(report, expected);
}

#[test]
fn fixture_clean_buckets_writes_an_empty_array() {
    let (exit_code, report) = run_scan_on_fixture("clean_buckets", "bucket");
    let expected = load_expected_report("clean_buckets");

    assert_eq!(exit_code, 0);
    assert_eq!(report, expected);
    assert_eq!(report, serde_json::json!([]));
}

#[test]
fn fixture_bucket_retrieval_failure_reports_the_diagnostic() {
    let (exit_code, report) = run_scan_on_fixture("bucket_retrieval_failure", "bucket");
    let expected = load_expected_report("bucket_retrieval_failure");

    assert_eq!(exit_code, 0);
    assert_eq!(report, expected);
}

#[test]
fn fixture_empty_inventory_still_persists_a_report() {
    let (exit_code, report) = run_scan_on_fixture("empty", "instance");
    let expected = load_expected_report("empty");

    assert_eq!(exit_code, 0);
    assert_eq!(report, expected);
}

#[test]
fn fixture_allowlisted_resources_are_exempt_via_config() {
    let (exit_code, report) = run_scan_on_fixture("allowlisted", "bucket");
    let expected = load_expected_report("allowlisted");

    assert_eq!(exit_code, 0);
    assert_eq!(report, expected);
}
