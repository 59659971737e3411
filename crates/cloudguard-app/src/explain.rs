//! The `explain` and `rules` use cases: rule documentation for operators.

use cloudguard_catalog::{CatalogEntry, RuleSource};
use cloudguard_types::catalog::{self, RuleDoc};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found documentation for the identifier.
    Found(RuleDoc),
    /// Unknown identifier; includes available rule_ids and codes.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up documentation for a rule_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match catalog::lookup_rule_doc(identifier) {
        Some(doc) => ExplainOutput::Found(doc),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: catalog::all_rule_ids(),
            available_codes: catalog::all_codes(),
        },
    }
}

/// List rule documentation, preferring the configured remote catalog.
pub fn run_rules(catalog_url: Option<&str>) -> Vec<CatalogEntry> {
    let source = match catalog_url {
        Some(url) => RuleSource::Remote {
            url: url.to_string(),
        },
        None => RuleSource::Static,
    };
    cloudguard_catalog::load(&source)
}

/// Format a documentation entry for terminal display.
pub fn format_explanation(doc: &RuleDoc) -> String {
    let mut out = String::new();

    out.push_str(doc.title);
    out.push('\n');
    out.push_str(&"=".repeat(doc.title.len()));
    out.push_str("\n\n");
    out.push_str(doc.summary);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(doc.remediation);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    rule_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule_id or code: {}\n\n", identifier));
    out.push_str("Available rule_ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
