use crate::{model::CloudguardConfigV1, presets};
use anyhow::Context;
use camino::Utf8PathBuf;
use cloudguard_domain::policy::{EffectiveConfig, RulePolicy};
use globset::Glob;

pub const DEFAULT_REPORT_DIR: &str = "reports";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub report_dir: Option<String>,
    pub catalog_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub report_dir: Utf8PathBuf,
    pub catalog_url: Option<String>,
}

pub fn resolve_config(
    cfg: CloudguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = presets::default_config();

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if !rc.allow.is_empty() {
            validate_allowlist(rule_id, &rc.allow)?;
            entry.allow = rc.allow.clone();
        }
        if let Some(tags) = &rc.required_tags {
            entry.required_tags = tags.clone();
        }
        if let Some(images) = &rc.approved_images {
            entry.approved_images = images.clone();
        }
    }

    let report_dir = overrides
        .report_dir
        .or(cfg.report_dir)
        .unwrap_or_else(|| DEFAULT_REPORT_DIR.to_string());

    let catalog_url = overrides.catalog_url.or(cfg.catalog_url);

    Ok(ResolvedConfig {
        effective,
        report_dir: Utf8PathBuf::from(report_dir),
        catalog_url,
    })
}

fn validate_allowlist(rule_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {rule_id}: {pattern}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use cloudguard_types::ids;

    #[test]
    fn defaults_enable_every_rule_with_name_tag_required() {
        let resolved =
            resolve_config(CloudguardConfigV1::default(), Overrides::default()).expect("resolve");

        assert_eq!(resolved.report_dir, Utf8PathBuf::from(DEFAULT_REPORT_DIR));
        assert!(resolved.catalog_url.is_none());

        let tags = &resolved
            .effective
            .rule_policy(ids::RULE_INSTANCE_REQUIRED_TAGS)
            .expect("rule enabled by default")
            .required_tags;
        assert_eq!(tags, &vec!["Name".to_string()]);
        assert!(
            resolved
                .effective
                .rule_policy(ids::RULE_BUCKET_MFA_DELETE)
                .is_some()
        );
    }

    #[test]
    fn file_config_disables_rules_and_sets_knobs() {
        let cfg = parse_config_toml(
            r#"
schema = "cloudguard.config.v1"
report_dir = "out/compliance"

[rules."bucket.mfa_delete"]
enabled = false

[rules."instance.approved_image"]
approved_images = ["img-golden"]

[rules."bucket.access_logging"]
allow = ["b-scratch-*"]
"#,
        )
        .expect("parse config");

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");

        assert!(
            resolved
                .effective
                .rule_policy(ids::RULE_BUCKET_MFA_DELETE)
                .is_none()
        );
        assert_eq!(
            resolved
                .effective
                .rule_policy(ids::RULE_INSTANCE_APPROVED_IMAGE)
                .unwrap()
                .approved_images,
            vec!["img-golden".to_string()]
        );
        assert_eq!(
            resolved
                .effective
                .rule_policy(ids::RULE_BUCKET_ACCESS_LOGGING)
                .unwrap()
                .allow,
            vec!["b-scratch-*".to_string()]
        );
        assert_eq!(resolved.report_dir, Utf8PathBuf::from("out/compliance"));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let cfg = parse_config_toml("report_dir = \"from-file\"\ncatalog_url = \"https://file.example/catalog\"\n")
            .expect("parse config");

        let resolved = resolve_config(
            cfg,
            Overrides {
                report_dir: Some("from-flag".to_string()),
                catalog_url: Some("https://flag.example/catalog".to_string()),
            },
        )
        .expect("resolve");

        assert_eq!(resolved.report_dir, Utf8PathBuf::from("from-flag"));
        assert_eq!(
            resolved.catalog_url.as_deref(),
            Some("https://flag.example/catalog")
        );
    }

    #[test]
    fn invalid_allow_glob_is_rejected_at_resolve_time() {
        let cfg = parse_config_toml(
            r#"
[rules."instance.open_ingress"]
allow = ["["]
"#,
        )
        .expect("parse config");

        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("invalid allow glob"));
    }
}
