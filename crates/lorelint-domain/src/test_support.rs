//! Shared builders for domain tests.

use crate::areas::AreaIndex;
use crate::model::{Document, RepoModel, ScanResult};
use crate::policy::{CheckPolicy, EffectiveConfig};
use lorelint_types::{ids, RepoPath};
use std::collections::{BTreeMap, BTreeSet};

pub fn doc(path: &str, text: &str) -> Document {
    let path = RepoPath::new(path);
    Document {
        extension: path.extension(),
        path,
        text: text.to_string(),
    }
}

/// Build a model whose path set contains exactly the given documents and
/// their ancestor directories, mirroring what the repo adapter produces.
pub fn model_with_documents(mut documents: Vec<Document>) -> RepoModel {
    documents.sort_by(|a, b| a.path.cmp(&b.path));

    let mut paths = BTreeSet::new();
    for d in &documents {
        paths.insert(d.path.as_str().to_string());
        let mut cursor = d.path.clone();
        while let Some(parent) = cursor.parent() {
            paths.insert(parent.as_str().to_string());
            cursor = parent;
        }
    }

    let mut scan = ScanResult::default();
    scan.total_files = documents.len() as u32;

    RepoModel {
        root: RepoPath::new("."),
        scan,
        documents,
        unreadable: Vec::new(),
        paths,
        areas: AreaIndex::empty(),
        area_index_loaded: false,
        ruleset_text: None,
    }
}

pub fn all_checks_config() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    for id in [
        ids::CHECK_IDS_UNIQUE,
        ids::CHECK_REFS_RESOLVE,
        ids::CHECK_DOCS_LANGUAGE,
    ] {
        checks.insert(id.to_string(), CheckPolicy::enabled());
    }
    EffectiveConfig {
        profile: "strict".to_string(),
        max_findings: 200,
        checks,
        report_paths: Vec::new(),
    }
}

pub fn config_with_check(check_id: &str) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled());
    EffectiveConfig {
        profile: "strict".to_string(),
        max_findings: 200,
        checks,
        report_paths: Vec::new(),
    }
}
