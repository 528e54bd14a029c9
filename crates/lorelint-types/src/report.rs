use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifiers for lorelint artifacts.
pub const SCHEMA_REPORT_V1: &str = "lorelint.report.v1";
pub const SCHEMA_SUMMARY_V1: &str = "lorelint.summary.v1";

/// Severity is intentionally small: it drives prioritization in reporting,
/// never the verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Lifecycle status of a content area, as declared in the area index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    Active,
    Inactive,
    Unknown,
}

/// A run passes only when it produced zero violations; any single violation of
/// any severity fails it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// One structured finding produced by a check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub file: RepoPath,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_file: Option<RepoPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_status: Option<AreaStatus>,
}

/// Per-check-id violation tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleTally {
    pub total: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl RuleTally {
    pub fn add(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Scan-level summary for the report header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanInfo {
    pub repo_root: String,
    pub profile: String,

    pub total_files_checked: u32,
    pub total_directories_scanned: u32,

    pub total_violations: u32,
    pub violations_emitted: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,

    pub area_index_loaded: bool,
    pub ruleset_rules_loaded: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceStatus {
    pub overall: Verdict,
    pub high_severity_issues: u32,
    pub medium_severity_issues: u32,
    pub low_severity_issues: u32,
}

/// The detailed report artifact written by `lorelint check`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub scan_info: ScanInfo,
    pub compliance_status: ComplianceStatus,
    pub violations: Vec<Violation>,
    pub violation_summary: BTreeMap<String, RuleTally>,
    /// Human-readable guidelines extracted from the markdown ruleset.
    /// Informational only, never machine-enforced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ruleset_rules: Vec<String>,
    /// Non-fatal conditions encountered during the run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub type LorelintReport = ReportEnvelope;
