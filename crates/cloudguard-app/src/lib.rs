//! Use case orchestration for cloudguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! provider, domain, settings, and catalog layers. It is intentionally thin
//! and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod report;
mod scan;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain, run_rules};
pub use report::{parse_report_document, serialize_report, write_report_file};
pub use scan::{ScanInput, ScanOutput, default_report_path, run_scan};
