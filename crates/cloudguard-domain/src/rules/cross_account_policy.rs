use crate::model::BucketDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed, require};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::{Value as JsonValue, json};

pub fn run(desc: &BucketDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_BUCKET_CROSS_ACCOUNT_POLICY) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.name) {
        return;
    }

    let Some(document) = require(
        &desc.policy,
        ids::RULE_BUCKET_CROSS_ACCOUNT_POLICY,
        "bucket policy",
        out,
    ) else {
        return;
    };

    // No policy attached at all: nothing to evaluate, not a violation.
    let Some(document) = document else {
        return;
    };

    for (index, statement) in document.statements.iter().enumerate() {
        if principal_is_wildcard(&statement.principal) {
            out.push(Issue {
                kind: IssueKind::Violation,
                rule_id: ids::RULE_BUCKET_CROSS_ACCOUNT_POLICY.to_string(),
                code: ids::CODE_WILDCARD_PRINCIPAL.to_string(),
                message: format!(
                    "bucket policy statement {index} grants access to a wildcard principal"
                ),
                data: json!({ "statement": index }),
            });
        }
    }
}

fn principal_is_wildcard(principal: &JsonValue) -> bool {
    match principal {
        JsonValue::String(s) => s == "*",
        JsonValue::Array(items) => items.iter().any(principal_is_wildcard),
        JsonValue::Object(map) => map.values().any(principal_is_wildcard),
        _ => false,
    }
}
