use crate::model::{
    BucketDescriptor, BucketVersioning, EncryptionConfig, InstanceDescriptor, PublicAccessBlock,
    Retrieved,
};
use crate::policy::{EffectiveConfig, RulePolicy};
use crate::rules;
use cloudguard_types::{ResourceKind, ids};
use std::collections::BTreeMap;

/// A fully compliant instance under the default rule set.
pub fn instance(instance_id: &str) -> InstanceDescriptor {
    let mut tags = BTreeMap::new();
    tags.insert("Name".to_string(), format!("{instance_id}-host"));

    InstanceDescriptor {
        instance_id: instance_id.to_string(),
        image_id: Some("img-0aa11bb22cc33dd44".to_string()),
        key_name: Some("ops-key".to_string()),
        tags,
        security_groups: Vec::new(),
    }
}

/// A fully compliant bucket under the default rule set.
pub fn bucket(name: &str) -> BucketDescriptor {
    BucketDescriptor {
        name: name.to_string(),
        public_access_block: Retrieved::Known(Some(PublicAccessBlock {
            block_public_acls: true,
            ignore_public_acls: true,
            block_public_policy: true,
            restrict_public_buckets: true,
        })),
        encryption: Retrieved::Known(Some(EncryptionConfig {
            algorithm: Some("AES256".to_string()),
            kms_key_id: None,
        })),
        versioning: Retrieved::Known(BucketVersioning {
            enabled: true,
            mfa_delete: true,
        }),
        access_logging: Retrieved::Known(true),
        policy: Retrieved::Known(None),
    }
}

/// Every rule for both kinds enabled, with the stock `Name` tag requirement.
pub fn config_all_rules() -> EffectiveConfig {
    let mut rules_map = BTreeMap::new();
    for kind in [ResourceKind::Instance, ResourceKind::Bucket] {
        for rule_id in rules::rule_ids(kind) {
            rules_map.insert(rule_id.to_string(), RulePolicy::enabled());
        }
    }
    if let Some(policy) = rules_map.get_mut(ids::RULE_INSTANCE_REQUIRED_TAGS) {
        policy.required_tags = vec!["Name".to_string()];
    }
    EffectiveConfig { rules: rules_map }
}

/// Exactly one rule enabled.
pub fn config_with_rule(rule_id: &str) -> EffectiveConfig {
    let mut policy = RulePolicy::enabled();
    if rule_id == ids::RULE_INSTANCE_REQUIRED_TAGS {
        policy.required_tags = vec!["Name".to_string()];
    }

    let mut rules_map = BTreeMap::new();
    rules_map.insert(rule_id.to_string(), policy);
    EffectiveConfig { rules: rules_map }
}

/// One rule enabled with resource-id allow patterns.
pub fn config_with_rule_allow(rule_id: &str, allow: Vec<&str>) -> EffectiveConfig {
    let mut cfg = config_with_rule(rule_id);
    if let Some(policy) = cfg.rules.get_mut(rule_id) {
        policy.allow = allow.into_iter().map(|s| s.to_string()).collect();
    }
    cfg
}
