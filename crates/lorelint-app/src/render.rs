use anyhow::Context;
use camino::Utf8Path;
use lorelint_render::{
    RenderableData, RenderableReport, RenderableSeverity, RenderableVerdictStatus,
    RenderableViolation,
};
use lorelint_types::{
    ids, ComplianceStatus, ReportEnvelope, ScanInfo, Severity, ToolMeta, Verdict, Violation,
    SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let report: ReportEnvelope = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Write bytes to `path`, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_report(path, text.as_bytes())
}

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        verdict: match report.compliance_status.overall {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        violations: report
            .violations
            .iter()
            .map(|v| RenderableViolation {
                severity: match v.severity {
                    Severity::High => RenderableSeverity::High,
                    Severity::Medium => RenderableSeverity::Medium,
                    Severity::Low => RenderableSeverity::Low,
                },
                check_id: Some(v.check_id.clone()),
                code: v.code.clone(),
                message: v.message.clone(),
                file: v.file.as_str().to_string(),
            })
            .collect(),
        data: RenderableData {
            violations_emitted: report.scan_info.violations_emitted,
            violations_total: report.scan_info.total_violations,
            files_checked: report.scan_info.total_files_checked,
            truncated_reason: report.scan_info.truncated_reason.clone(),
        },
    }
}

/// A report describing a tool failure rather than repository state. Emitted so
/// downstream consumers always receive a well-formed artifact.
pub fn runtime_error_report(message: &str) -> ReportEnvelope {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "lorelint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        scan_info: ScanInfo {
            repo_root: String::new(),
            profile: "unknown".to_string(),
            total_violations: 1,
            violations_emitted: 1,
            ..ScanInfo::default()
        },
        compliance_status: ComplianceStatus {
            overall: Verdict::Fail,
            high_severity_issues: 1,
            medium_severity_issues: 0,
            low_severity_issues: 0,
        },
        violations: vec![Violation {
            severity: Severity::High,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            file: lorelint_types::RepoPath::default(),
            line: None,
            reference: None,
            other_file: None,
            id: None,
            area_status: None,
        }],
        violation_summary: Default::default(),
        ruleset_rules: Vec::new(),
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_reports_round_trip() {
        let report = runtime_error_report("scan exploded");
        let bytes = serialize_report(&report).expect("serialize");
        let parsed = parse_report_json(std::str::from_utf8(&bytes).expect("utf8"))
            .expect("parse");
        assert_eq!(parsed.compliance_status.overall, Verdict::Fail);
        assert_eq!(parsed.violations[0].code, ids::CODE_RUNTIME_ERROR);
        assert_eq!(parsed.violations[0].message, "scan exploded");
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = parse_report_json(r#"{"schema": "other.v9"}"#).unwrap_err();
        assert!(err.to_string().contains("parse report json"));
    }

    #[test]
    fn renderable_carries_counts_and_truncation() {
        let mut report = runtime_error_report("boom");
        report.scan_info.truncated_reason = Some("truncated".to_string());
        let renderable = to_renderable(&report);
        assert_eq!(renderable.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(renderable.violations.len(), 1);
        assert_eq!(renderable.data.truncated_reason.as_deref(), Some("truncated"));
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = camino::Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let target = root.join("artifacts/lorelint/report.json");

        write_report(&target, b"{}").expect("write");
        assert_eq!(std::fs::read(&target).expect("read"), b"{}");
    }
}
