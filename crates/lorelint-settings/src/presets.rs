use lorelint_domain::policy::{CheckPolicy, EffectiveConfig};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "data" => data_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        max_findings: 200,
        checks: default_checks(),
        report_paths: Vec::new(),
    }
}

/// Data-only repositories often keep documentation elsewhere, so the README
/// language heuristic is off by default.
fn data_profile() -> EffectiveConfig {
    let mut checks = default_checks();
    checks.insert(
        lorelint_types::ids::CHECK_DOCS_LANGUAGE.to_string(),
        CheckPolicy::disabled(),
    );
    EffectiveConfig {
        profile: "data".to_string(),
        max_findings: 200,
        checks,
        report_paths: Vec::new(),
    }
}

fn default_checks() -> BTreeMap<String, CheckPolicy> {
    use lorelint_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(CHECK_IDS_UNIQUE.to_string(), CheckPolicy::enabled());
    m.insert(CHECK_REFS_RESOLVE.to_string(), CheckPolicy::enabled());
    m.insert(CHECK_DOCS_LANGUAGE.to_string(), CheckPolicy::enabled());

    m
}
