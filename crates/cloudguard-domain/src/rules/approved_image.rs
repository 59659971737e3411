use crate::model::InstanceDescriptor;
use crate::policy::EffectiveConfig;
use crate::rules::utils::{build_allowlist, is_allowed};
use cloudguard_types::{Issue, IssueKind, ids};
use serde_json::json;

pub fn run(desc: &InstanceDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_INSTANCE_APPROVED_IMAGE) else {
        return;
    };
    // No approved list configured: the rule has nothing to compare against.
    if policy.approved_images.is_empty() {
        return;
    }
    let allow = build_allowlist(&policy.allow);
    if is_allowed(allow.as_ref(), &desc.instance_id) {
        return;
    }

    match desc.image_id.as_deref() {
        Some(image) if policy.approved_images.iter().any(|a| a == image) => {}
        Some(image) => out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_INSTANCE_APPROVED_IMAGE.to_string(),
            code: ids::CODE_UNAPPROVED_IMAGE.to_string(),
            message: format!("image {image} is not on the approved image list"),
            data: json!({ "image_id": image }),
        }),
        None => out.push(Issue {
            kind: IssueKind::Violation,
            rule_id: ids::RULE_INSTANCE_APPROVED_IMAGE.to_string(),
            code: ids::CODE_UNAPPROVED_IMAGE.to_string(),
            message: "instance has no image id recorded".to_string(),
            data: json!({ "image_id": null }),
        }),
    }
}
