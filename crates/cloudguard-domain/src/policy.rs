use std::collections::BTreeMap;

/// Per-rule configuration resolved before a scan starts. Rules read it,
/// nothing mutates it during evaluation.
#[derive(Clone, Debug)]
pub struct RulePolicy {
    pub enabled: bool,
    /// Resource-id glob patterns exempt from this rule.
    pub allow: Vec<String>,
    /// `instance.required_tags`: tag keys that must be present.
    pub required_tags: Vec<String>,
    /// `instance.approved_image`: acceptable image ids. Empty means the rule
    /// is inapplicable, not that every image is rejected.
    pub approved_images: Vec<String>,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            allow: Vec::new(),
            required_tags: Vec::new(),
            approved_images: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::enabled()
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|p| p.enabled)
    }
}
