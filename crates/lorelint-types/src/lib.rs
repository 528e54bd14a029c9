//! Stable DTOs and IDs used across the lorelint workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::RepoPath;
pub use report::{
    AreaStatus, ComplianceStatus, LorelintReport, ReportEnvelope, RuleTally, ScanInfo, Severity,
    ToolMeta, Verdict, Violation, SCHEMA_REPORT_V1, SCHEMA_SUMMARY_V1,
};
