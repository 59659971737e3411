//! Rule catalog sources: the static registry plus an optional remote
//! knowledge base.
//!
//! The catalog is informational: it documents rules for operators (`rules`,
//! `explain`) and is logged at scan start. It never decides which rules
//! execute, and an unreachable remote source degrades to the static registry
//! instead of blocking a scan.

#![forbid(unsafe_code)]

use anyhow::Context;
use cloudguard_types::catalog;
use serde::{Deserialize, Serialize};

/// Where rule documentation comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleSource {
    Static,
    Remote { url: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub rule_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Load rule documentation from the given source.
///
/// Remote failure (or an empty remote catalog) falls back to the static
/// registry.
pub fn load(source: &RuleSource) -> Vec<CatalogEntry> {
    match source {
        RuleSource::Static => static_entries(),
        RuleSource::Remote { url } => match fetch_remote(url) {
            Ok(entries) if !entries.is_empty() => entries,
            Ok(_) => {
                tracing::warn!(url = %url, "remote catalog returned no entries, using static catalog");
                static_entries()
            }
            Err(err) => {
                tracing::warn!(
                    url = %url,
                    error = %format!("{err:#}"),
                    "remote catalog unavailable, using static catalog"
                );
                static_entries()
            }
        },
    }
}

/// The built-in catalog, one entry per registered rule.
pub fn static_entries() -> Vec<CatalogEntry> {
    catalog::all_rule_ids()
        .iter()
        .map(|rule_id| {
            let doc = catalog::lookup_rule_doc(rule_id).expect("registry covers its own rule ids");
            CatalogEntry {
                rule_id: (*rule_id).to_string(),
                title: doc.title.to_string(),
                description: doc.summary.to_string(),
            }
        })
        .collect()
}

/// Parse a remote catalog document (a JSON array of entries).
pub fn parse_remote_catalog(text: &str) -> anyhow::Result<Vec<CatalogEntry>> {
    serde_json::from_str(text).context("parse catalog json")
}

fn fetch_remote(url: &str) -> anyhow::Result<Vec<CatalogEntry>> {
    let text = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("fetch catalog from {url}"))?
        .text()
        .context("read catalog response body")?;
    parse_remote_catalog(&text)
}
