use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use time::OffsetDateTime;

/// Category of cloud object being scanned. One scan covers exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Instance,
    Bucket,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Instance => "instance",
            ResourceKind::Bucket => "bucket",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retrieval failure is a diagnostic ("could not verify"), not a confirmed
/// violation. Both travel through the same finding so one report shows the
/// complete picture per resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Violation,
    RetrievalFailure,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub kind: IssueKind,
    pub rule_id: String,
    pub code: String,
    pub message: String,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// All issues for one resource, in rule evaluation order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub resource_id: String,
    pub issues: Vec<Issue>,
}

impl Finding {
    pub fn is_compliant(&self) -> bool {
        self.issues.is_empty()
    }
}

/// One scan's worth of non-compliant findings, in descriptor arrival order.
///
/// The persisted document is [`Report::entries`], not this struct: the wire
/// contract is a top-level array of `{ "resourceId", "issues" }` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub kind: ResourceKind,
    pub scanned_at: OffsetDateTime,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Project the report into its wire shape. Compliant resources never
    /// appear; issue messages are flattened to plain strings.
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.findings
            .iter()
            .filter(|f| !f.is_compliant())
            .map(|f| ReportEntry {
                resource_id: f.resource_id.clone(),
                issues: f.issues.iter().map(|i| i.message.clone()).collect(),
            })
            .collect()
    }
}

/// Wire shape of one report element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub resource_id: String,
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn issue_kind_serializes_snake_case() {
        let v = serde_json::to_value(IssueKind::RetrievalFailure).unwrap();
        assert_eq!(v, json!("retrieval_failure"));
        let v = serde_json::to_value(IssueKind::Violation).unwrap();
        assert_eq!(v, json!("violation"));
    }

    #[test]
    fn report_entry_uses_camel_case_resource_id() {
        let entry = ReportEntry {
            resource_id: "i-1".to_string(),
            issues: vec!["missing required tag 'Name'".to_string()],
        };
        let v = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            v,
            json!({ "resourceId": "i-1", "issues": ["missing required tag 'Name'"] })
        );
    }

    #[test]
    fn report_entries_drop_compliant_findings() {
        let report = Report {
            kind: ResourceKind::Bucket,
            scanned_at: datetime!(2026-01-01 00:00:00 UTC),
            findings: vec![
                Finding {
                    resource_id: "b-compliant".to_string(),
                    issues: Vec::new(),
                },
                Finding {
                    resource_id: "b-flagged".to_string(),
                    issues: vec![Issue {
                        kind: IssueKind::Violation,
                        rule_id: "bucket.versioning".to_string(),
                        code: "versioning_disabled".to_string(),
                        message: "versioning is not enabled".to_string(),
                        data: JsonValue::Null,
                    }],
                },
            ],
        };

        let entries = report.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].resource_id, "b-flagged");
        assert_eq!(entries[0].issues, vec!["versioning is not enabled"]);
    }
}
