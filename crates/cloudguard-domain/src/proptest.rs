//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Engine output size and finding non-emptiness
//! - Evaluation determinism and idempotence
//! - Arrival-order preservation under the parallel descriptor loop

use crate::engine::{evaluate, evaluate_one};
use crate::model::{
    BucketDescriptor, BucketVersioning, EncryptionConfig, IngressRule, InstanceDescriptor,
    PolicyDocument, PolicyStatement, PublicAccessBlock, ResourceDescriptor, Retrieved,
    SecurityGroup,
};
use crate::policy::EffectiveConfig;
use crate::rules;
use crate::test_support::config_all_rules;
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary descriptors
// ============================================================================

fn arb_reason() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("access denied".to_string()),
        Just("throttled".to_string()),
        Just("internal provider error".to_string()),
    ]
}

fn arb_retrieved<T: std::fmt::Debug>(
    value: impl Strategy<Value = T>,
) -> impl Strategy<Value = Retrieved<T>> {
    prop_oneof![
        4 => value.prop_map(Retrieved::Known),
        1 => arb_reason().prop_map(Retrieved::Failed),
    ]
}

fn arb_ingress_rule() -> impl Strategy<Value = IngressRule> {
    prop_oneof![
        Just(IngressRule {
            protocol: Some("tcp".to_string()),
            cidr_ranges: vec!["10.0.0.0/8".to_string()],
        }),
        Just(IngressRule {
            protocol: Some("tcp".to_string()),
            cidr_ranges: vec!["0.0.0.0/0".to_string()],
        }),
        Just(IngressRule {
            protocol: None,
            cidr_ranges: Vec::new(),
        }),
    ]
}

fn arb_security_group() -> impl Strategy<Value = SecurityGroup> {
    (
        "sg-[0-9a-f]{6}",
        arb_retrieved(prop::collection::vec(arb_ingress_rule(), 0..3)),
    )
        .prop_map(|(group_id, ingress)| SecurityGroup { group_id, ingress })
}

fn arb_tags() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop_oneof![
        Just(BTreeMap::new()),
        Just(BTreeMap::from([("Name".to_string(), "host".to_string())])),
        Just(BTreeMap::from([("Owner".to_string(), "team".to_string())])),
    ]
}

fn arb_instance() -> impl Strategy<Value = InstanceDescriptor> {
    (
        prop::option::of("img-[0-9a-f]{8}"),
        prop::option::of(prop_oneof![
            Just(String::new()),
            Just("ops-key".to_string())
        ]),
        arb_tags(),
        prop::collection::vec(arb_security_group(), 0..3),
    )
        .prop_map(|(image_id, key_name, tags, security_groups)| InstanceDescriptor {
            instance_id: String::new(),
            image_id,
            key_name,
            tags,
            security_groups,
        })
}

fn arb_policy_document() -> impl Strategy<Value = Option<PolicyDocument>> {
    prop_oneof![
        Just(None),
        Just(Some(PolicyDocument {
            statements: vec![PolicyStatement {
                effect: Some("Allow".to_string()),
                principal: json!("*"),
            }],
        })),
        Just(Some(PolicyDocument {
            statements: vec![PolicyStatement {
                effect: Some("Allow".to_string()),
                principal: json!({ "AWS": "arn:aws:iam::123456789012:root" }),
            }],
        })),
    ]
}

fn arb_bucket() -> impl Strategy<Value = BucketDescriptor> {
    (
        arb_retrieved(prop::option::of(any::<bool>().prop_map(|block| {
            PublicAccessBlock {
                block_public_acls: block,
                ..Default::default()
            }
        }))),
        arb_retrieved(prop::option::of(Just(EncryptionConfig {
            algorithm: Some("AES256".to_string()),
            kms_key_id: None,
        }))),
        arb_retrieved((any::<bool>(), any::<bool>()).prop_map(|(enabled, mfa_delete)| {
            BucketVersioning {
                enabled,
                mfa_delete,
            }
        })),
        arb_retrieved(any::<bool>()),
        arb_retrieved(arb_policy_document()),
    )
        .prop_map(
            |(public_access_block, encryption, versioning, access_logging, policy)| {
                BucketDescriptor {
                    name: String::new(),
                    public_access_block,
                    encryption,
                    versioning,
                    access_logging,
                    policy,
                }
            },
        )
}

/// A descriptor sequence with unique, position-derived resource ids.
fn arb_descriptors() -> impl Strategy<Value = Vec<ResourceDescriptor>> {
    prop::collection::vec(
        prop_oneof![
            arb_instance().prop_map(ResourceDescriptor::Instance),
            arb_bucket().prop_map(ResourceDescriptor::Bucket),
        ],
        0..12,
    )
    .prop_map(|descriptors| {
        descriptors
            .into_iter()
            .enumerate()
            .map(|(index, desc)| match desc {
                ResourceDescriptor::Instance(mut i) => {
                    i.instance_id = format!("i-{index}");
                    ResourceDescriptor::Instance(i)
                }
                ResourceDescriptor::Bucket(mut b) => {
                    b.name = format!("b-{index}");
                    ResourceDescriptor::Bucket(b)
                }
            })
            .collect()
    })
}

// ============================================================================
// Property tests: engine invariants
// ============================================================================

proptest! {
    /// Output length never exceeds input length, and compliant resources
    /// never appear: every emitted finding carries at least one issue.
    #[test]
    fn output_bounded_and_findings_non_empty(descriptors in arb_descriptors()) {
        let findings = evaluate(&descriptors, &config_all_rules());

        prop_assert!(findings.len() <= descriptors.len());
        for finding in &findings {
            prop_assert!(
                !finding.issues.is_empty(),
                "compliant resource {} leaked into output",
                finding.resource_id
            );
        }
    }

    /// Running the engine twice on the same immutable input yields identical
    /// findings, byte for byte once serialized.
    #[test]
    fn evaluation_is_idempotent(descriptors in arb_descriptors()) {
        let cfg = config_all_rules();
        let first = evaluate(&descriptors, &cfg);
        let second = evaluate(&descriptors, &cfg);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    /// Despite the parallel descriptor loop, output order is the descriptor
    /// arrival order (restricted to flagged resources).
    #[test]
    fn output_preserves_arrival_order(descriptors in arb_descriptors()) {
        let findings = evaluate(&descriptors, &config_all_rules());

        let input_ids: Vec<&str> = descriptors.iter().map(|d| d.resource_id()).collect();
        let output_ids: Vec<&str> = findings.iter().map(|f| f.resource_id.as_str()).collect();

        let mut cursor = 0usize;
        for id in &output_ids {
            let position = input_ids[cursor..]
                .iter()
                .position(|input| input == id)
                .map(|offset| cursor + offset);
            prop_assert!(
                position.is_some(),
                "finding for {} out of arrival order (output {:?}, input {:?})",
                id,
                output_ids,
                input_ids
            );
            cursor = position.unwrap() + 1;
        }
    }

    /// Issues within one finding follow rule registration order.
    #[test]
    fn issues_follow_rule_registration_order(descriptors in arb_descriptors()) {
        let cfg = config_all_rules();
        for desc in &descriptors {
            let finding = evaluate_one(desc, &cfg);
            let order = rules::rule_ids(desc.kind());

            let mut last_index = 0usize;
            for issue in &finding.issues {
                let index = order
                    .iter()
                    .position(|id| *id == issue.rule_id)
                    .expect("issue references a registered rule");
                prop_assert!(
                    index >= last_index,
                    "issue from {} out of rule order in {:?}",
                    issue.rule_id,
                    finding
                );
                last_index = index;
            }
        }
    }

    /// With no rules enabled the engine flags nothing, whatever the input.
    #[test]
    fn empty_config_produces_no_findings(descriptors in arb_descriptors()) {
        let cfg = EffectiveConfig { rules: BTreeMap::new() };
        let findings = evaluate(&descriptors, &cfg);
        prop_assert!(findings.is_empty(), "got {:?}", findings);
    }
}
