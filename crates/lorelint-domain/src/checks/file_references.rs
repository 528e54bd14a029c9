//! Cross-file reference resolution for JSON and markdown documents.

use crate::model::{Document, RepoModel};
use crate::policy::EffectiveConfig;
use lorelint_types::path::normalize_segments;
use lorelint_types::{ids, AreaStatus, RepoPath, Severity, Violation};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// JSON object keys whose string values are treated as filesystem paths.
pub const REF_KEYS: [&str; 7] = ["index", "file", "path", "dir", "icon", "image", "script"];

/// A candidate only counts as a path when it contains a separator or ends in
/// one of these extensions; plain identifier strings are not references.
const REF_EXTENSIONS: [&str; 6] = [".json", ".md", ".py", ".txt", ".png", ".jpg"];

/// Templates carry this flag together with comment syntax that makes them
/// invalid strict JSON; they are not data and are skipped entirely.
const TEMPLATE_MARKER: &str = "\"is_template\": true";

fn markdown_link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("markdown link pattern"))
}

pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Violation>) {
    if !cfg.check_enabled(ids::CHECK_REFS_RESOLVE) {
        return;
    }

    for doc in &model.documents {
        if cfg.is_report_artifact(&doc.path) {
            continue;
        }
        let result = match doc.extension.as_str() {
            ".json" => check_json_document(model, doc),
            ".md" => check_markdown_document(model, doc),
            _ => continue,
        };
        match result {
            Ok(mut violations) => out.append(&mut violations),
            // One bad file never aborts the batch.
            Err(err) => out.push(analysis_error(&doc.path, &err)),
        }
    }

    for (path, err) in &model.unreadable {
        out.push(analysis_error(path, err));
    }
}

fn check_json_document(model: &RepoModel, doc: &Document) -> Result<Vec<Violation>, String> {
    if doc.text.contains(TEMPLATE_MARKER) && doc.text.contains("//") {
        return Ok(Vec::new());
    }
    // Malformed JSON is reported by a dedicated well-formedness concern.
    let Ok(value) = serde_json::from_str::<Value>(&doc.text) else {
        return Ok(Vec::new());
    };

    let mut violations = Vec::new();
    for reference in extract_references(&value) {
        if reference.contains("{{") && reference.contains("}}") {
            continue;
        }

        let resolved = if let Some(rest) = reference.strip_prefix('/') {
            // Absolute from the scanned root.
            normalize_segments(rest)
        } else {
            // Relative to the referencing file's own directory.
            match doc.path.parent() {
                Some(dir) => normalize_segments(&format!("{}/{}", dir, reference)),
                None => normalize_segments(&reference),
            }
        };

        if model.path_exists(&resolved) {
            continue;
        }

        let area_status = model.areas.status_of(&reference);
        let (severity, suffix) = if area_status == AreaStatus::Inactive {
            (
                Severity::Low,
                " (area marked as 'inactive' in the area index)",
            )
        } else {
            (Severity::High, "")
        };

        violations.push(Violation {
            severity,
            check_id: ids::CHECK_REFS_RESOLVE.to_string(),
            code: ids::CODE_BROKEN_FILE_REFERENCE.to_string(),
            message: format!(
                "Broken file reference '{}' in {}{}",
                reference, doc.path, suffix
            ),
            file: doc.path.clone(),
            line: None,
            reference: Some(reference),
            other_file: None,
            id: None,
            area_status: Some(area_status),
        });
    }

    Ok(violations)
}

fn check_markdown_document(model: &RepoModel, doc: &Document) -> Result<Vec<Violation>, String> {
    let mut violations = Vec::new();

    for caps in markdown_link_pattern().captures_iter(&doc.text) {
        let target = caps[1].to_string();
        if target.starts_with("http://") || target.starts_with("https://") || target.starts_with('#')
        {
            continue;
        }

        // Markdown targets resolve from the scan root, not the referencing
        // file's directory. The asymmetry with JSON references is deliberate.
        let resolved = normalize_segments(target.trim_start_matches('/'));
        if model.path_exists(&resolved) {
            continue;
        }

        violations.push(Violation {
            severity: Severity::Medium,
            check_id: ids::CHECK_REFS_RESOLVE.to_string(),
            code: ids::CODE_BROKEN_MARKDOWN_REFERENCE.to_string(),
            message: format!("Broken markdown reference '{}' in {}", target, doc.path),
            file: doc.path.clone(),
            line: None,
            reference: Some(target),
            other_file: None,
            id: None,
            area_status: None,
        });
    }

    Ok(violations)
}

/// Extract candidate path strings from values under [`REF_KEYS`], recursing
/// through nested objects and arrays.
pub fn extract_references(value: &Value) -> Vec<String> {
    let mut refs = Vec::new();
    collect_references(value, &mut refs);
    refs
}

fn collect_references(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for key in REF_KEYS {
                if let Some(Value::String(s)) = map.get(key) {
                    if s.contains('/') || REF_EXTENSIONS.iter().any(|ext| s.ends_with(ext)) {
                        out.push(s.clone());
                    }
                }
            }
            for nested in map.values() {
                collect_references(nested, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        _ => {}
    }
}

fn analysis_error(path: &RepoPath, err: &str) -> Violation {
    Violation {
        severity: Severity::Low,
        check_id: ids::CHECK_REFS_RESOLVE.to_string(),
        code: ids::CODE_FILE_ANALYSIS_ERROR.to_string(),
        message: format!("Error analyzing file {}: {}", path, err),
        file: path.clone(),
        line: None,
        reference: None,
        other_file: None,
        id: None,
        area_status: None,
    }
}
