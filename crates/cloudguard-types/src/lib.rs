//! Stable DTOs and IDs used across the cloudguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for issues, findings, and the emitted report
//! - stable string IDs and codes for rules
//! - the static rule documentation registry

#![forbid(unsafe_code)]

pub mod catalog;
pub mod ids;
pub mod report;

pub use catalog::{RuleDoc, all_codes, all_rule_ids, lookup_rule_doc};
pub use report::{Finding, Issue, IssueKind, Report, ReportEntry, ResourceKind};
