use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `cloudguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CloudguardConfigV1 {
    /// Optional schema string for tooling (`cloudguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directory scan reports are written into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<String>,

    /// Remote rule catalog endpoint. Unset means static catalog only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,

    /// Map of rule_id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override default enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Resource-id glob patterns exempt from the rule.
    #[serde(default)]
    pub allow: Vec<String>,

    /// `instance.required_tags`: tag keys that must be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_tags: Option<Vec<String>>,

    /// `instance.approved_image`: acceptable image ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_images: Option<Vec<String>>,
}
