use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `lorelint.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LorelintConfigV1 {
    /// Optional schema string for tooling (`lorelint.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// How many violations to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Repo-relative path of the area index, `master_index.json` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_index: Option<String>,

    /// Repo-relative path of the markdown ruleset, `RULESET.md` by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruleset: Option<String>,

    /// Glob patterns excluded from the scan, relative to the repo root.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override the profile's enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
