use crate::{model::LorelintConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use lorelint_domain::policy::EffectiveConfig;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

/// Engine policy plus the scan inputs that live in user config rather than
/// the policy itself.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub area_index: String,
    pub ruleset: String,
    pub ignore: Vec<String>,
}

pub fn resolve_config(
    cfg: LorelintConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides; unknown check ids are rejected so typos surface
    // instead of silently keeping a check at its preset state.
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .get_mut(check_id)
            .with_context(|| format!("unknown check id in config: {check_id}"))?;
        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
    }

    validate_ignore(&cfg.ignore)?;

    Ok(ResolvedConfig {
        effective,
        area_index: cfg
            .area_index
            .unwrap_or_else(|| "master_index.json".to_string()),
        ruleset: cfg.ruleset.unwrap_or_else(|| "RULESET.md".to_string()),
        ignore: cfg.ignore,
    })
}

fn validate_ignore(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid ignore glob: {pattern}"))?;
    }
    Ok(())
}
