use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Lorelint report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files checked: {}\n- Violations: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.files_checked,
        report.data.violations_emitted,
        report.data.violations_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");

    for v in &report.violations {
        let sev = match v.severity {
            RenderableSeverity::High => "HIGH",
            RenderableSeverity::Medium => "MEDIUM",
            RenderableSeverity::Low => "LOW",
        };
        out.push_str(&format!(
            "- [{}] `{}` / `{}` — {} (`{}`)\n",
            sev,
            v.check_id.as_deref().unwrap_or(""),
            v.code,
            v.message,
            v.file
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableViolation};

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            violations: Vec::new(),
            data: RenderableData {
                violations_emitted: 0,
                violations_total: 0,
                files_checked: 12,
                truncated_reason: None,
            },
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Files checked: 12"));
        assert!(md.contains("No violations"));
    }

    #[test]
    fn renders_violations_with_truncation_note() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            violations: vec![RenderableViolation {
                severity: RenderableSeverity::High,
                check_id: Some("ids.unique".to_string()),
                code: "duplicate_id".to_string(),
                message: "Duplicate ID 'x1' found in a/c.json (also in a/b.json)".to_string(),
                file: "a/c.json".to_string(),
            }],
            data: RenderableData {
                violations_emitted: 1,
                violations_total: 2,
                files_checked: 3,
                truncated_reason: Some("truncated".to_string()),
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("> Note: truncated"));
        assert!(md.contains("## Violations"));
        assert!(md.contains("[HIGH]"));
        assert!(md.contains("`ids.unique` / `duplicate_id`"));
        assert!(md.contains("a/c.json"));
    }
}
