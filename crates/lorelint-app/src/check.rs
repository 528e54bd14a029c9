//! The `check` use case: scan, evaluate, and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use lorelint_repo::LoadOptions;
use lorelint_settings::{Overrides, ResolvedConfig};
use lorelint_types::{
    ComplianceStatus, RepoPath, ReportEnvelope, ScanInfo, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Repo-relative paths of this run's own artifacts, excluded from content
    /// checks.
    pub report_paths: Vec<RepoPath>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, scan the repository, evaluate
/// checks, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        lorelint_settings::LorelintConfigV1::default()
    } else {
        lorelint_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let mut resolved =
        lorelint_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;
    resolved.effective.report_paths = input.report_paths.clone();

    let load = LoadOptions {
        ignore: resolved.ignore.clone(),
        area_index: resolved.area_index.clone(),
        ruleset: resolved.ruleset.clone(),
    };
    let model =
        lorelint_repo::build_repo_model(input.repo_root, &load).context("build repository model")?;

    let ruleset_rules = model
        .ruleset_text
        .as_deref()
        .map(lorelint_domain::ruleset::extract_rules)
        .unwrap_or_default();

    let domain_report = lorelint_domain::evaluate(&model, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "lorelint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        scan_info: ScanInfo {
            repo_root: input.repo_root.to_string(),
            profile: resolved.effective.profile.clone(),
            total_files_checked: domain_report.data.files_checked,
            total_directories_scanned: domain_report.data.directories_scanned,
            total_violations: domain_report.data.violations_total,
            violations_emitted: domain_report.data.violations_emitted,
            truncated_reason: domain_report.data.truncated_reason.clone(),
            area_index_loaded: model.area_index_loaded,
            ruleset_rules_loaded: ruleset_rules.len() as u32,
        },
        compliance_status: ComplianceStatus {
            overall: domain_report.verdict,
            high_severity_issues: domain_report.counts.high,
            medium_severity_issues: domain_report.counts.medium,
            low_severity_issues: domain_report.counts.low,
        },
        violations: domain_report.violations,
        violation_summary: domain_report.tally,
        ruleset_rules,
        warnings: model.scan.warnings.iter().map(|w| w.to_string()).collect(),
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(root: &Utf8Path, rel: &str, contents: &str) {
        let abs = root.join(rel);
        if let Some(parent) = abs.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&abs, contents).expect("write file");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        write_file(root, "factions/iron_pact.json", r#"{"id": "iron_pact"}"#);

        let output = run_check(CheckInput {
            repo_root: root,
            config_text: "",
            overrides: Overrides::default(),
            report_paths: Vec::new(),
        })
        .expect("run_check");

        assert_eq!(output.resolved_config.effective.profile, "strict");
        assert_eq!(output.report.compliance_status.overall, Verdict::Pass);
        assert_eq!(output.report.scan_info.total_files_checked, 1);
        assert!(!output.report.scan_info.area_index_loaded);
    }

    #[test]
    fn duplicate_ids_fail_the_run_and_count_as_high() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        write_file(root, "a/b.json", r#"{"id": "x1"}"#);
        write_file(root, "a/c.json", r#"{"id": "x1"}"#);

        let output = run_check(CheckInput {
            repo_root: root,
            config_text: "",
            overrides: Overrides::default(),
            report_paths: Vec::new(),
        })
        .expect("run_check");

        assert_eq!(output.report.compliance_status.overall, Verdict::Fail);
        assert_eq!(output.report.compliance_status.high_severity_issues, 1);
        assert_eq!(
            output.report.violations[0].message,
            "Duplicate ID 'x1' found in a/c.json (also in a/b.json)"
        );
        assert_eq!(
            output.report.violation_summary["ids.unique"].high,
            1
        );
    }

    #[test]
    fn ruleset_rules_are_carried_in_the_report() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        write_file(root, "data.json", "{}");
        write_file(
            root,
            "RULESET.md",
            "- Every faction needs a unique identifier\n",
        );

        let output = run_check(CheckInput {
            repo_root: root,
            config_text: "",
            overrides: Overrides::default(),
            report_paths: Vec::new(),
        })
        .expect("run_check");

        assert_eq!(output.report.scan_info.ruleset_rules_loaded, 1);
        assert_eq!(
            output.report.ruleset_rules,
            vec!["Every faction needs a unique identifier".to_string()]
        );
    }

    #[test]
    fn report_paths_exclude_our_own_artifacts() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");

        write_file(root, "data/a.json", r#"{"id": "x1"}"#);
        write_file(
            root,
            "artifacts/lorelint/report.json",
            r#"{"violations": [{"id": "x1"}]}"#,
        );

        let output = run_check(CheckInput {
            repo_root: root,
            config_text: "",
            overrides: Overrides::default(),
            report_paths: vec![RepoPath::new("artifacts/lorelint/report.json")],
        })
        .expect("run_check");

        assert_eq!(output.report.compliance_status.overall, Verdict::Pass);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
