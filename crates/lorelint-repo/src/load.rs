use anyhow::Context;
use camino::Utf8Path;
use lorelint_domain::areas::AreaIndex;
use lorelint_domain::model::{DirectoryNode, Document, RepoModel, ScanWarning};
use lorelint_types::RepoPath;
use std::collections::BTreeSet;

/// What to load beyond the tree itself. Paths are repo-relative.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub ignore: Vec<String>,
    pub area_index: String,
    pub ruleset: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            ignore: Vec::new(),
            area_index: "master_index.json".to_string(),
            ruleset: "RULESET.md".to_string(),
        }
    }
}

/// Scan `repo_root` and assemble the model the engine evaluates. This is the
/// only place that reads repository content; everything downstream works from
/// the snapshot.
pub fn build_repo_model(repo_root: &Utf8Path, options: &LoadOptions) -> anyhow::Result<RepoModel> {
    let ignore = crate::scan::build_ignore_set(&options.ignore)?;
    let mut scan = crate::scan::scan_tree(repo_root, &ignore).context("scan repository tree")?;

    let mut documents = Vec::new();
    let mut unreadable = Vec::new();
    for file in &scan.files {
        if file.extension != ".json" && file.extension != ".md" {
            continue;
        }
        let abs = repo_root.join(file.path.as_str());
        match std::fs::read_to_string(&abs) {
            Ok(text) => documents.push(Document {
                path: file.path.clone(),
                extension: file.extension.clone(),
                text,
            }),
            Err(err) => unreadable.push((file.path.clone(), err.to_string())),
        }
    }

    let mut paths: BTreeSet<String> = scan
        .files
        .iter()
        .map(|f| f.path.as_str().to_string())
        .collect();
    collect_directory_paths(&scan.tree, &mut paths);

    let (areas, area_index_loaded) =
        load_area_index(repo_root, &options.area_index, &mut scan.warnings);

    let ruleset_text = std::fs::read_to_string(repo_root.join(&options.ruleset)).ok();

    Ok(RepoModel {
        root: RepoPath::from(repo_root),
        scan,
        documents,
        unreadable,
        paths,
        areas,
        area_index_loaded,
        ruleset_text,
    })
}

/// A missing or malformed index degrades to an empty one; reference checks
/// then treat every area as unknown.
fn load_area_index(
    repo_root: &Utf8Path,
    index_path: &str,
    warnings: &mut Vec<ScanWarning>,
) -> (AreaIndex, bool) {
    let abs = repo_root.join(index_path);
    let text = match std::fs::read_to_string(&abs) {
        Ok(text) => text,
        Err(_) => return (AreaIndex::empty(), false),
    };
    match serde_json::from_str(&text) {
        Ok(value) => (AreaIndex::from_json(&value), true),
        Err(err) => {
            warnings.push(ScanWarning {
                path: RepoPath::new(index_path),
                message: format!("area index is not valid JSON: {}", err),
            });
            (AreaIndex::empty(), false)
        }
    }
}

fn collect_directory_paths(node: &DirectoryNode, out: &mut BTreeSet<String>) {
    for child in node.subdirectories.values() {
        out.insert(child.path.as_str().to_string());
        collect_directory_paths(child, out);
    }
}
