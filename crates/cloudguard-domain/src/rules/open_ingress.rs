use crate::model::InstanceDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed, require};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::json;

const ANY_CIDR: &str = "0.0.0.0/0";

pub fn run(desc: &InstanceDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_INSTANCE_OPEN_INGRESS) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.instance_id) {
        return;
    }

    for group in &desc.security_groups {
        let attribute = format!("ingress rules for security group {}", group.group_id);
        let Some(ingress) = require(
            &group.ingress,
            ids::RULE_INSTANCE_OPEN_INGRESS,
            &attribute,
            out,
        ) else {
            continue;
        };

        if ingress
            .iter()
            .any(|rule| rule.cidr_ranges.iter().any(|cidr| cidr == ANY_CIDR))
        {
            out.push(Issue {
                kind: IssueKind::Violation,
                rule_id: ids::RULE_INSTANCE_OPEN_INGRESS.to_string(),
                code: ids::CODE_OPEN_INGRESS.to_string(),
                message: format!(
                    "security group {} allows unrestricted ingress from {ANY_CIDR}",
                    group.group_id
                ),
                data: json!({ "security_group": group.group_id }),
            });
        }
    }
}
