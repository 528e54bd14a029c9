use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use lorelint_domain::model::{DirectoryNode, FileDescriptor, ScanResult, ScanWarning};
use lorelint_types::RepoPath;
use std::path::PathBuf;
use time::OffsetDateTime;
use walkdir::WalkDir;

/// Directory names that are never content, pruned before descent. Hidden
/// directories (leading dot) are pruned as well.
const EXCLUDED_DIRS: [&str; 11] = [
    ".git",
    ".github",
    "__pycache__",
    ".pytest_cache",
    "node_modules",
    ".venv",
    "venv",
    "env",
    ".idea",
    ".vscode",
    "target",
];

/// Compile user ignore patterns into a matcher over repo-relative paths.
pub fn build_ignore_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("compile ignore pattern '{}'", p))?);
    }
    b.build().context("build ignore globset")
}

/// Walk the tree under `repo_root` and record every surviving file and
/// directory. Symlinks are not followed; traversal errors become warnings
/// rather than aborting the scan.
pub fn scan_tree(repo_root: &Utf8Path, ignore: &GlobSet) -> anyhow::Result<ScanResult> {
    if !repo_root.is_dir() {
        anyhow::bail!("repository root {} is not a directory", repo_root);
    }

    let mut files: Vec<FileDescriptor> = Vec::new();
    let mut directories: Vec<RepoPath> = Vec::new();
    let mut warnings: Vec<ScanWarning> = Vec::new();

    let walker = WalkDir::new(repo_root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() && e.depth() > 0 {
                if EXCLUDED_DIRS.contains(&name.as_ref()) || name.starts_with('.') {
                    return false;
                }
            }
            match relative_path(repo_root, e.path().to_path_buf()) {
                Some(rel) if e.depth() > 0 => !ignore.is_match(rel.as_str()),
                _ => true,
            }
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .and_then(|p| relative_path(repo_root, p.to_path_buf()))
                    .unwrap_or_default();
                warnings.push(ScanWarning {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Some(rel) = relative_path(repo_root, entry.path().to_path_buf()) else {
            warnings.push(ScanWarning {
                path: RepoPath::default(),
                message: format!("non-UTF-8 path under {}", repo_root),
            });
            continue;
        };

        if entry.file_type().is_dir() {
            directories.push(rel);
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                warnings.push(ScanWarning {
                    path: rel,
                    message: format!("metadata unavailable: {}", err),
                });
                continue;
            }
        };
        let modified = metadata
            .modified()
            .map(OffsetDateTime::from)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);

        files.push(FileDescriptor {
            name: entry.file_name().to_string_lossy().into_owned(),
            extension: rel.extension(),
            path: rel,
            size: metadata.len(),
            modified,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    directories.sort();

    let mut file_types = std::collections::BTreeMap::new();
    for f in &files {
        *file_types.entry(f.extension.clone()).or_insert(0u32) += 1;
    }

    let mut tree = DirectoryNode {
        name: String::new(),
        path: RepoPath::new(""),
        ..DirectoryNode::default()
    };
    for dir in &directories {
        insert_directory(&mut tree, dir);
    }
    for f in &files {
        insert_file(&mut tree, f);
    }

    Ok(ScanResult {
        total_files: files.len() as u32,
        total_directories: directories.len() as u32,
        file_types,
        files,
        tree,
        warnings,
    })
}

/// Walk (creating as needed) down to the node for `dir`.
fn descend<'a>(tree: &'a mut DirectoryNode, dir: &RepoPath) -> &'a mut DirectoryNode {
    let mut node = tree;
    let mut prefix = String::new();
    for segment in dir.as_str().split('/') {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);
        let path = RepoPath::new(&prefix);
        node = node
            .subdirectories
            .entry(segment.to_string())
            .or_insert_with(|| DirectoryNode {
                name: segment.to_string(),
                path,
                ..DirectoryNode::default()
            });
    }
    node
}

fn insert_directory(tree: &mut DirectoryNode, dir: &RepoPath) {
    let _ = descend(tree, dir);
}

fn insert_file(tree: &mut DirectoryNode, file: &FileDescriptor) {
    match file.path.parent() {
        Some(dir) => descend(tree, &dir).files.push(file.clone()),
        None => tree.files.push(file.clone()),
    }
}

fn relative_path(repo_root: &Utf8Path, abs: PathBuf) -> Option<RepoPath> {
    let abs = Utf8PathBuf::from_path_buf(abs).ok()?;
    let rel = abs.strip_prefix(repo_root).ok()?;
    Some(RepoPath::new(&rel.as_str().replace('\\', "/")))
}
