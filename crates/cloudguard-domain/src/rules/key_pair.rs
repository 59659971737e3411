use crate::model::InstanceDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::Value as JsonValue;

pub fn run(desc: &InstanceDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_INSTANCE_KEY_PAIR) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.instance_id) {
        return;
    }

    let missing = desc.key_name.as_deref().is_none_or(str::is_empty);
    if missing {
        out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_INSTANCE_KEY_PAIR.to_string(),
            code: ids::CODE_MISSING_KEY_PAIR.to_string(),
            message: "no key pair associated with this instance".to_string(),
            data: JsonValue::Null,
        });
    }
}
