use cloudguard_types::{Finding, IssueKind, Report, ResourceKind};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueCounts {
    pub violations: u32,
    pub retrieval_failures: u32,
}

impl IssueCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = IssueCounts::default();
        for finding in findings {
            for issue in &finding.issues {
                match issue.kind {
                    IssueKind::Violation => counts.violations += 1,
                    IssueKind::RetrievalFailure => counts.retrieval_failures += 1,
                }
            }
        }
        counts
    }
}

/// Assemble the scan report from evaluated findings.
///
/// Compliant findings are filtered here as well, so callers assembling
/// findings outside [`crate::evaluate`] still get the persisted-report
/// invariant. An empty input yields a well-formed empty report.
pub fn aggregate(
    kind: ResourceKind,
    scanned_at: OffsetDateTime,
    findings: Vec<Finding>,
) -> Report {
    let findings = findings
        .into_iter()
        .filter(|f| !f.is_compliant())
        .collect();

    Report {
        kind,
        scanned_at,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudguard_types::Issue;
    use serde_json::Value as JsonValue;
    use time::macros::datetime;

    fn violation(resource_id: &str) -> Finding {
        Finding {
            resource_id: resource_id.to_string(),
            issues: vec![Issue {
                kind: IssueKind::Violation,
                rule_id: "bucket.versioning".to_string(),
                code: "versioning_disabled".to_string(),
                message: "versioning is not enabled".to_string(),
                data: JsonValue::Null,
            }],
        }
    }

    #[test]
    fn aggregate_drops_compliant_findings_and_keeps_order() {
        let findings = vec![
            violation("b-2"),
            Finding {
                resource_id: "b-ok".to_string(),
                issues: Vec::new(),
            },
            violation("b-1"),
        ];

        let report = aggregate(
            ResourceKind::Bucket,
            datetime!(2026-01-01 00:00:00 UTC),
            findings,
        );

        let ids: Vec<&str> = report
            .findings
            .iter()
            .map(|f| f.resource_id.as_str())
            .collect();
        assert_eq!(ids, vec!["b-2", "b-1"]);
    }

    #[test]
    fn aggregate_empty_input_yields_empty_report() {
        let report = aggregate(
            ResourceKind::Instance,
            datetime!(2026-01-01 00:00:00 UTC),
            Vec::new(),
        );
        assert!(report.findings.is_empty());
        assert!(report.entries().is_empty());
    }

    #[test]
    fn counts_split_by_issue_kind() {
        let mut finding = violation("b-1");
        finding.issues.push(Issue {
            kind: IssueKind::RetrievalFailure,
            rule_id: "bucket.encryption_at_rest".to_string(),
            code: "retrieval_failed".to_string(),
            message: "failed to verify encryption configuration: timeout".to_string(),
            data: JsonValue::Null,
        });

        let counts = IssueCounts::from_findings(&[finding]);
        assert_eq!(
            counts,
            IssueCounts {
                violations: 1,
                retrieval_failures: 1
            }
        );
    }
}
