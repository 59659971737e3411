use crate::model::BucketDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed, require};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::Value as JsonValue;

pub fn run(desc: &BucketDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_BUCKET_ACCESS_LOGGING) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.name) {
        return;
    }

    let Some(enabled) = require(
        &desc.access_logging,
        ids::RULE_BUCKET_ACCESS_LOGGING,
        "access logging state",
        out,
    ) else {
        return;
    };

    if !enabled {
        out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_BUCKET_ACCESS_LOGGING.to_string(),
            code: ids::CODE_LOGGING_DISABLED.to_string(),
            message: "access logging is not enabled".to_string(),
            data: JsonValue::Null,
        });
    }
}
