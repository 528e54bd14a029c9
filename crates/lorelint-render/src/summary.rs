use lorelint_types::{ReportEnvelope, Severity, SCHEMA_SUMMARY_V1};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Build the condensed summary artifact from a full report.
///
/// High and medium violations are itemized per file; low ones are only
/// counted so the summary stays small on noisy repositories.
pub fn render_summary(report: &ReportEnvelope) -> Value {
    let mut breakdown: BTreeMap<&str, u32> = BTreeMap::new();
    for v in &report.violations {
        *breakdown.entry(v.code.as_str()).or_insert(0) += 1;
    }

    let mut per_file: BTreeMap<&str, Vec<Value>> = BTreeMap::new();
    let mut low_codes: BTreeMap<&str, u32> = BTreeMap::new();
    let mut low_count: u32 = 0;
    for v in &report.violations {
        if v.severity == Severity::Low {
            low_count += 1;
            *low_codes.entry(v.code.as_str()).or_insert(0) += 1;
            continue;
        }
        per_file.entry(v.file.as_str()).or_default().push(json!({
            "severity": v.severity,
            "code": v.code,
            "message": v.message,
        }));
    }

    let files: Vec<Value> = per_file
        .into_iter()
        .map(|(file, violations)| json!({ "file": file, "violations": violations }))
        .collect();

    json!({
        "schema": SCHEMA_SUMMARY_V1,
        "tool": report.tool,
        "generated_at": report.finished_at.format(&time::format_description::well_known::Rfc3339).ok(),
        "overall": report.compliance_status.overall,
        "totals": {
            "violations": report.scan_info.total_violations,
            "high": report.compliance_status.high_severity_issues,
            "medium": report.compliance_status.medium_severity_issues,
            "low": report.compliance_status.low_severity_issues,
        },
        "violation_breakdown": breakdown,
        "files": files,
        "low_severity": {
            "count": low_count,
            "codes": low_codes,
        },
    })
}
