use crate::model::Retrieved;
use cloudguard_types::{Issue, IssueKind, ids};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::json;

pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        // Treat allowlist entries as glob patterns (case-sensitive).
        let glob =
            Glob::new(pattern).expect("allowlist patterns must be validated in cloudguard-settings");
        builder.add(glob);
    }
    Some(
        builder
            .build()
            .expect("allowlist patterns must be validated in cloudguard-settings"),
    )
}

pub fn is_allowed(allow: Option<&GlobSet>, resource_id: &str) -> bool {
    allow.map(|set| set.is_match(resource_id)).unwrap_or(false)
}

/// Unwrap a retrieved attribute, or record a retrieval-failure diagnostic.
///
/// Returning `None` means the rule stays silent for this attribute: the
/// failure entry already tells the operator compliance is unverified.
pub fn require<'a, T>(
    attr: &'a Retrieved<T>,
    rule_id: &str,
    attribute: &str,
    out: &mut Vec<Issue>,
) -> Option<&'a T> {
    match attr {
        Retrieved::Known(value) => Some(value),
        Retrieved::Failed(reason) => {
            out.push(retrieval_failure(rule_id, attribute, reason));
            None
        }
    }
}

pub fn retrieval_failure(rule_id: &str, attribute: &str, reason: &str) -> Issue {
    Issue {
        kind: IssueKind::RetrievalFailure,
        rule_id: rule_id.to_string(),
        code: ids::CODE_RETRIEVAL_FAILED.to_string(),
        message: format!("failed to verify {attribute}: {reason}"),
        data: json!({
            "attribute": attribute,
            "reason": reason,
        }),
    }
}
