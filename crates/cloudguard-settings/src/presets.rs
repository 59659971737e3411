use cloudguard_domain::policy::{EffectiveConfig, RulePolicy};
use cloudguard_domain::rules;
use cloudguard_types::{ResourceKind, ids};
use std::collections::BTreeMap;

/// Stock defaults: every rule enabled, `Name` as the one required tag, and no
/// approved-image list (which leaves `instance.approved_image` inapplicable
/// until a list is configured).
pub fn default_config() -> EffectiveConfig {
    EffectiveConfig {
        rules: default_rules(),
    }
}

fn default_rules() -> BTreeMap<String, RulePolicy> {
    let mut m = BTreeMap::new();

    for kind in [ResourceKind::Instance, ResourceKind::Bucket] {
        for rule_id in rules::rule_ids(kind) {
            m.insert(rule_id.to_string(), RulePolicy::enabled());
        }
    }

    if let Some(policy) = m.get_mut(ids::RULE_INSTANCE_REQUIRED_TAGS) {
        policy.required_tags = vec!["Name".to_string()];
    }

    m
}
