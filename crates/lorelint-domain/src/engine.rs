use crate::checks;
use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, EvaluationData, SeverityCounts};
use lorelint_types::{RuleTally, Verdict, Violation};
use std::collections::BTreeMap;

pub fn evaluate(model: &RepoModel, cfg: &EffectiveConfig) -> DomainReport {
    let mut violations: Vec<Violation> = Vec::new();

    // Fixed check order; concatenation is the report order.
    checks::run_all(model, cfg, &mut violations);

    let total = violations.len() as u32;

    // Counts and the per-check tally cover every violation found, not just
    // the ones that survive truncation.
    let counts = SeverityCounts::from_violations(&violations);
    let mut tally: BTreeMap<String, RuleTally> = BTreeMap::new();
    for v in &violations {
        tally.entry(v.check_id.clone()).or_default().add(v.severity);
    }

    let mut emitted = violations;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "violations truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    // Severity drives prioritization only; one violation of any severity
    // fails the run.
    let verdict = if total == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = EvaluationData {
        files_checked: model.scan.total_files,
        directories_scanned: model.scan.total_directories,
        violations_total: total,
        violations_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        violations: emitted,
        counts,
        tally,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{all_checks_config, doc, model_with_documents};
    use lorelint_types::ids;

    #[test]
    fn clean_model_passes() {
        let model = model_with_documents(vec![doc("data/a.json", r#"{"id": "x1"}"#)]);
        let report = evaluate(&model, &all_checks_config());
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.violations.is_empty());
        assert!(report.tally.is_empty());
    }

    #[test]
    fn a_single_violation_fails_the_run() {
        let model = model_with_documents(vec![doc(
            "docs/guide.md",
            "see [missing](missing.md)",
        )]);
        let report = evaluate(&model, &all_checks_config());
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.counts.medium, 1);
        assert_eq!(report.tally[ids::CHECK_REFS_RESOLVE].medium, 1);
    }

    #[test]
    fn truncation_records_reason_but_not_the_verdict() {
        let model = model_with_documents(vec![
            doc("a/one.json", r#"{"id": "dup"}"#),
            doc("b/two.json", r#"{"id": "dup", "key": "dup"}"#),
        ]);
        let mut cfg = all_checks_config();
        cfg.max_findings = 1;

        let report = evaluate(&model, &cfg);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.violations_total, 2);
        assert_eq!(report.data.violations_emitted, 1);
        assert!(report
            .data
            .truncated_reason
            .as_deref()
            .is_some_and(|r| r.contains("max_findings=1")));
    }

    #[test]
    fn counts_and_tally_cover_truncated_violations() {
        let model = model_with_documents(vec![
            doc("a/one.json", r#"{"id": "dup"}"#),
            doc("b/two.json", r#"{"id": "dup", "key": "dup"}"#),
        ]);
        let mut cfg = all_checks_config();
        cfg.max_findings = 1;

        let report = evaluate(&model, &cfg);
        assert_eq!(report.violations.len(), 1);
        // Both duplicates are high severity; truncation must not hide the
        // second one from the counts.
        assert_eq!(report.counts.high, 2);
        assert_eq!(report.tally[ids::CHECK_IDS_UNIQUE].total, 2);
        assert_eq!(report.tally[ids::CHECK_IDS_UNIQUE].high, 2);
    }
}
