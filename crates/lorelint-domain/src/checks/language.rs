//! Naive documentation-language heuristic.
//!
//! Content files are expected to be in the project's native language; only
//! the top-level README is checked for English technical sections so the
//! repository stays approachable.

use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use lorelint_types::{ids, Severity, Violation};

const README: &str = "README.md";

const ENGLISH_TERMS: [&str; 6] = [
    "install",
    "usage",
    "setup",
    "requirements",
    "getting started",
    "installation",
];

/// Anything shorter is too small to judge.
const MIN_CONTENT_LEN: usize = 100;

pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Violation>) {
    if !cfg.check_enabled(ids::CHECK_DOCS_LANGUAGE) {
        return;
    }

    let Some(doc) = model.document(README) else {
        return;
    };

    let content = doc.text.to_lowercase();
    if content.chars().count() <= MIN_CONTENT_LEN {
        return;
    }

    let has_english = ENGLISH_TERMS.iter().any(|term| content.contains(term));
    if !has_english {
        out.push(Violation {
            severity: Severity::Low,
            check_id: ids::CHECK_DOCS_LANGUAGE.to_string(),
            code: ids::CODE_MISSING_ENGLISH_DOCUMENTATION.to_string(),
            message: format!(
                "Technical documentation {} should include English sections for broader accessibility",
                README
            ),
            file: doc.path.clone(),
            line: None,
            reference: None,
            other_file: None,
            id: None,
            area_status: None,
        });
    }
}
