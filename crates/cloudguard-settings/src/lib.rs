//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CloudguardConfigV1, RuleConfig};
pub use resolve::{DEFAULT_REPORT_DIR, Overrides, ResolvedConfig};

/// Parse `cloudguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CloudguardConfigV1> {
    let cfg: CloudguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + file +
/// overrides + per-rule config).
pub fn resolve_config(
    cfg: CloudguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
