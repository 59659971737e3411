use crate::model::BucketDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed, require};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::Value as JsonValue;

pub fn run(desc: &BucketDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_BUCKET_VERSIONING) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.name) {
        return;
    }

    let Some(versioning) = require(
        &desc.versioning,
        ids::RULE_BUCKET_VERSIONING,
        "versioning state",
        out,
    ) else {
        return;
    };

    if !versioning.enabled {
        out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_BUCKET_VERSIONING.to_string(),
            code: ids::CODE_VERSIONING_DISABLED.to_string(),
            message: "versioning is not enabled".to_string(),
            data: JsonValue::Null,
        });
    }
}
