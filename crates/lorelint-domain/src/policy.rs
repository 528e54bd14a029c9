use lorelint_types::RepoPath;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Resolved configuration consumed by the engine.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub max_findings: usize,
    pub checks: BTreeMap<String, CheckPolicy>,
    /// This tool's own artifact paths for the current run. They are
    /// self-referential and excluded from content checks so repeated runs do
    /// not flag the previous report.
    pub report_paths: Vec<RepoPath>,
}

impl EffectiveConfig {
    pub fn check_enabled(&self, check_id: &str) -> bool {
        self.checks.get(check_id).is_some_and(|p| p.enabled)
    }

    pub fn is_report_artifact(&self, path: &RepoPath) -> bool {
        self.report_paths.iter().any(|p| p == path)
    }
}
