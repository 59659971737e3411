use crate::model::InstanceDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::json;

pub fn run(desc: &InstanceDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_INSTANCE_REQUIRED_TAGS) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.instance_id) {
        return;
    }

    for tag in &policy.required_tags {
        if !desc.tags.contains_key(tag) {
            out.push(Issue {
                kind: IssueKind::Violation,
                rule_id: ids::RULE_INSTANCE_REQUIRED_TAGS.to_string(),
                code: ids::CODE_MISSING_REQUIRED_TAG.to_string(),
                message: format!("missing required tag '{tag}'"),
                data: json!({ "tag": tag }),
            });
        }
    }
}
