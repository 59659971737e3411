use crate::model::ResourceDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules;
use cloudguard_types::{Finding, Issue};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Evaluate every applicable rule against every descriptor.
///
/// Descriptors are independent and rules are pure, so the loop runs across
/// worker threads; the indexed collect puts results back into descriptor
/// arrival order, which is part of the report contract. Issues within a
/// finding follow rule registration order. Compliant resources are dropped.
pub fn evaluate(descriptors: &[ResourceDescriptor], cfg: &EffectiveConfig) -> Vec<Finding> {
    let findings: Vec<Finding> = descriptors
        .par_iter()
        .map(|desc| evaluate_one(desc, cfg))
        .collect();

    findings
        .into_iter()
        .filter(|finding| !finding.is_compliant())
        .collect()
}

/// Evaluate one descriptor against its kind's rules.
pub fn evaluate_one(desc: &ResourceDescriptor, cfg: &EffectiveConfig) -> Finding {
    let mut issues = Vec::new();
    match desc {
        ResourceDescriptor::Instance(instance) => rules::run_instance(instance, cfg, &mut issues),
        ResourceDescriptor::Bucket(bucket) => rules::run_bucket(bucket, cfg, &mut issues),
    }
    dedup_issues(&mut issues);

    Finding {
        resource_id: desc.resource_id().to_string(),
        issues,
    }
}

// A finding never repeats the same issue from the same rule; first
// occurrence wins so insertion order is preserved.
fn dedup_issues(issues: &mut Vec<Issue>) {
    let mut seen: BTreeSet<(String, String, String)> = BTreeSet::new();
    issues.retain(|issue| {
        seen.insert((
            issue.rule_id.clone(),
            issue.code.clone(),
            issue.message.clone(),
        ))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngressRule, ResourceDescriptor, Retrieved, SecurityGroup};
    use crate::test_support::{bucket, config_all_rules, config_with_rule, instance};
    use cloudguard_types::{IssueKind, ids};

    fn open_group(group_id: &str) -> SecurityGroup {
        SecurityGroup {
            group_id: group_id.to_string(),
            ingress: Retrieved::Known(vec![IngressRule {
                protocol: Some("tcp".to_string()),
                cidr_ranges: vec!["0.0.0.0/0".to_string()],
            }]),
        }
    }

    #[test]
    fn compliant_resources_are_dropped_from_output() {
        let descriptors = vec![
            ResourceDescriptor::Bucket(bucket("b-compliant")),
            ResourceDescriptor::Instance(instance("i-compliant")),
        ];

        let findings = evaluate(&descriptors, &config_all_rules());
        assert!(findings.is_empty(), "got {findings:?}");
    }

    #[test]
    fn output_preserves_descriptor_arrival_order() {
        let mut b1 = bucket("b-1");
        b1.versioning = Retrieved::Known(crate::model::BucketVersioning {
            enabled: false,
            mfa_delete: false,
        });
        let mut i1 = instance("i-1");
        i1.security_groups = vec![open_group("sg-1")];
        let mut b2 = bucket("b-2");
        b2.access_logging = Retrieved::Known(false);

        let descriptors = vec![
            ResourceDescriptor::Bucket(b1),
            ResourceDescriptor::Instance(i1),
            ResourceDescriptor::Bucket(b2),
        ];

        let findings = evaluate(&descriptors, &config_all_rules());
        let ids: Vec<&str> = findings.iter().map(|f| f.resource_id.as_str()).collect();
        assert_eq!(ids, vec!["b-1", "i-1", "b-2"]);
    }

    #[test]
    fn issues_follow_rule_registration_order() {
        // Open ingress registers before required_tags for instances.
        let mut desc = instance("i-1");
        desc.security_groups = vec![open_group("sg-123")];
        desc.tags.clear();

        let finding = evaluate_one(&ResourceDescriptor::Instance(desc), &config_all_rules());
        let codes: Vec<&str> = finding.issues.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![ids::CODE_OPEN_INGRESS, ids::CODE_MISSING_REQUIRED_TAG]
        );
    }

    #[test]
    fn duplicate_issues_from_one_rule_are_collapsed() {
        // Two world-open groups with the same id would yield identical issues.
        let mut desc = instance("i-1");
        desc.security_groups = vec![open_group("sg-1"), open_group("sg-1")];

        let finding = evaluate_one(
            &ResourceDescriptor::Instance(desc),
            &config_with_rule(ids::RULE_INSTANCE_OPEN_INGRESS),
        );
        assert_eq!(finding.issues.len(), 1);
    }

    #[test]
    fn failed_lookup_on_one_resource_does_not_leak_into_another() {
        let mut failing = bucket("b-failing");
        failing.encryption = Retrieved::Failed("internal provider error".to_string());
        let healthy = bucket("b-healthy");

        let baseline = evaluate_one(
            &ResourceDescriptor::Bucket(healthy.clone()),
            &config_all_rules(),
        );
        let findings = evaluate(
            &[
                ResourceDescriptor::Bucket(failing),
                ResourceDescriptor::Bucket(healthy),
            ],
            &config_all_rules(),
        );

        // Only the failing bucket is flagged, and only with the diagnostic.
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].resource_id, "b-failing");
        assert_eq!(findings[0].issues.len(), 1);
        assert_eq!(findings[0].issues[0].kind, IssueKind::RetrievalFailure);
        assert!(baseline.is_compliant());
    }

    #[test]
    fn disabled_rules_produce_no_issues() {
        let mut desc = bucket("b-1");
        desc.access_logging = Retrieved::Known(false);

        // Only versioning enabled; the logging violation must not surface.
        let finding = evaluate_one(
            &ResourceDescriptor::Bucket(desc),
            &config_with_rule(ids::RULE_BUCKET_VERSIONING),
        );
        assert!(finding.is_compliant());
    }

    #[test]
    fn scenario_open_ingress_and_missing_name_tag() {
        let mut desc = instance("i-1");
        desc.security_groups = vec![open_group("sg-0a1b2c")];
        desc.tags.clear();

        let findings = evaluate(
            &[ResourceDescriptor::Instance(desc)],
            &config_all_rules(),
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].resource_id, "i-1");
        let messages: Vec<&str> = findings[0]
            .issues
            .iter()
            .map(|i| i.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "security group sg-0a1b2c allows unrestricted ingress from 0.0.0.0/0",
                "missing required tag 'Name'",
            ]
        );
    }

    #[test]
    fn scenario_retrieval_failure_is_isolated_per_attribute() {
        let mut desc = bucket("b-2");
        desc.encryption = Retrieved::Failed("access denied".to_string());
        desc.versioning = Retrieved::Known(crate::model::BucketVersioning {
            enabled: false,
            mfa_delete: true,
        });

        let finding = evaluate_one(&ResourceDescriptor::Bucket(desc), &config_all_rules());

        // The encryption diagnostic and the independent versioning violation
        // both surface; the other rules still ran clean.
        let kinds: Vec<(IssueKind, &str)> = finding
            .issues
            .iter()
            .map(|i| (i.kind, i.rule_id.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (
                    IssueKind::RetrievalFailure,
                    ids::RULE_BUCKET_ENCRYPTION_AT_REST
                ),
                (IssueKind::Violation, ids::RULE_BUCKET_VERSIONING),
            ]
        );
    }
}
