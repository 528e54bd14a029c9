//! Cross-file identifier uniqueness.

use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use lorelint_types::{ids, RepoPath, Severity, Violation};
use serde_json::Value;
use std::collections::BTreeMap;

/// JSON object keys treated as carrying a cross-file-unique identifier.
pub const ID_KEYS: [&str; 7] = [
    "id",
    "key",
    "actor_id",
    "faction_id",
    "item_id",
    "event_id",
    "mission_id",
];

/// Value-keyed registry of identifiers, first-seen-wins.
///
/// Feeding observations one at a time keeps duplicate detection an explicit
/// step: `observe` either records the declaration or reports the file that
/// declared the value first. Two identical ids within one file flag the
/// second occurrence too.
#[derive(Clone, Debug, Default)]
pub struct IdRegistry {
    seen: BTreeMap<String, RepoPath>,
}

impl IdRegistry {
    pub fn new() -> Self {
        IdRegistry::default()
    }

    /// Record `id` as declared by `file`. Returns the first-declaring file
    /// when the value was already registered; the registry is not updated in
    /// that case.
    pub fn observe(&mut self, id: &str, file: &RepoPath) -> Option<RepoPath> {
        if let Some(first) = self.seen.get(id) {
            return Some(first.clone());
        }
        self.seen.insert(id.to_string(), file.clone());
        None
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Extract identifier values from a parsed JSON document.
///
/// At every object, values under [`ID_KEYS`] qualify when they are strings or
/// integers (coerced to their string form). Recursion into nested objects and
/// array elements is unconditional: a field can both carry an id and contain
/// id-bearing descendants.
pub fn extract_ids(value: &Value) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids(value, &mut ids);
    ids
}

fn collect_ids(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for key in ID_KEYS {
                match map.get(key) {
                    Some(Value::String(s)) => out.push(s.clone()),
                    Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                        out.push(n.to_string());
                    }
                    _ => {}
                }
            }
            for nested in map.values() {
                collect_ids(nested, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_ids(item, out);
            }
        }
        _ => {}
    }
}

pub fn run(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Violation>) {
    if !cfg.check_enabled(ids::CHECK_IDS_UNIQUE) {
        return;
    }

    let mut registry = IdRegistry::new();

    for doc in &model.documents {
        if doc.extension != ".json" || cfg.is_report_artifact(&doc.path) {
            continue;
        }
        // Malformed JSON is a well-formedness concern, not a duplicate.
        let Ok(value) = serde_json::from_str::<Value>(&doc.text) else {
            continue;
        };

        for id in extract_ids(&value) {
            if let Some(first) = registry.observe(&id, &doc.path) {
                out.push(Violation {
                    severity: Severity::High,
                    check_id: ids::CHECK_IDS_UNIQUE.to_string(),
                    code: ids::CODE_DUPLICATE_ID.to_string(),
                    message: format!(
                        "Duplicate ID '{}' found in {} (also in {})",
                        id, doc.path, first
                    ),
                    file: doc.path.clone(),
                    line: None,
                    reference: None,
                    other_file: Some(first),
                    id: Some(id),
                    area_status: None,
                });
            }
        }
    }
}
