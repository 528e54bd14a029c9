use crate::areas::AreaIndex;
use lorelint_types::RepoPath;
use std::collections::{BTreeMap, BTreeSet};
use time::OffsetDateTime;

/// One regular file recorded by the tree walker. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct FileDescriptor {
    pub name: String,
    pub path: RepoPath,
    pub size: u64,
    /// Lower-cased, with its leading dot; empty for extension-less files.
    pub extension: String,
    pub modified: OffsetDateTime,
}

/// Nested mirror of the scanned directory tree. Parent-to-child ownership
/// only; no back edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryNode {
    pub name: String,
    pub path: RepoPath,
    pub subdirectories: BTreeMap<String, DirectoryNode>,
    pub files: Vec<FileDescriptor>,
}

/// A non-fatal condition encountered during traversal (permission denied on a
/// subtree, unreadable metadata).
#[derive(Clone, Debug, PartialEq)]
pub struct ScanWarning {
    pub path: RepoPath,
    pub message: String,
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The walker's hand-off artifact consumed by every downstream check.
#[derive(Clone, Debug, Default)]
pub struct ScanResult {
    pub total_files: u32,
    pub total_directories: u32,
    pub file_types: BTreeMap<String, u32>,
    /// Flat file list, sorted by repo-relative path.
    pub files: Vec<FileDescriptor>,
    pub tree: DirectoryNode,
    pub warnings: Vec<ScanWarning>,
}

impl Default for FileDescriptor {
    fn default() -> Self {
        FileDescriptor {
            name: String::new(),
            path: RepoPath::default(),
            size: 0,
            extension: String::new(),
            modified: OffsetDateTime::UNIX_EPOCH,
        }
    }
}

/// Raw text of one scanned `.json`/`.md` file. Each check parses the text
/// itself so a malformed document only affects the check that cares.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub path: RepoPath,
    pub extension: String,
    pub text: String,
}

/// Everything the engine needs for one evaluation, constructed by the repo
/// adapter in a single pass. The engine itself never touches the filesystem.
#[derive(Clone, Debug, Default)]
pub struct RepoModel {
    pub root: RepoPath,
    pub scan: ScanResult,
    /// `.json`/`.md` documents in path order.
    pub documents: Vec<Document>,
    /// Documents that could not be read, with the error text.
    pub unreadable: Vec<(RepoPath, String)>,
    /// Every scanned file and directory path (ancestors included), used to
    /// resolve references against the scan snapshot.
    pub paths: BTreeSet<String>,
    pub areas: AreaIndex,
    pub area_index_loaded: bool,
    /// Raw markdown ruleset text, when the repo carries one.
    pub ruleset_text: Option<String>,
}

impl RepoModel {
    pub fn document(&self, path: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.path.as_str() == path)
    }

    pub fn path_exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}
