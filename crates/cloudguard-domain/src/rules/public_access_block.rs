use crate::model::BucketDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed, require};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::json;

pub fn run(desc: &BucketDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.name) {
        return;
    }

    let Some(block) = require(
        &desc.public_access_block,
        ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK,
        "public access block configuration",
        out,
    ) else {
        return;
    };

    match block {
        None => out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK.to_string(),
            code: ids::CODE_PUBLIC_ACCESS_UNBLOCKED.to_string(),
            message: "public access block is not configured for this bucket".to_string(),
            data: json!({ "configured": false }),
        }),
        Some(block) if !block.block_public_acls => out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK.to_string(),
            code: ids::CODE_PUBLIC_ACCESS_UNBLOCKED.to_string(),
            message: "public access block does not block public ACLs".to_string(),
            data: json!({ "configured": true, "block_public_acls": false }),
        }),
        Some(_) => {}
    }
}
