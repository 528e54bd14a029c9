use lorelint_types::{RuleTally, Severity, Verdict, Violation};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityCounts {
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut counts = SeverityCounts::default();
        for v in violations {
            match v.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }
}

/// Engine-level summary carried into the report envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationData {
    pub files_checked: u32,
    pub directories_scanned: u32,
    pub violations_total: u32,
    pub violations_emitted: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub counts: SeverityCounts,
    pub tally: BTreeMap<String, RuleTally>,
    pub data: EvaluationData,
}
