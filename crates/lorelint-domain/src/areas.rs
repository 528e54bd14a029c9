//! Area status oracle backed by the external area index document.

use lorelint_types::AreaStatus;
use serde_json::Value;

/// One tracked content area. `dir` is a trailing-slash-normalized directory
/// prefix; entries keep the order they appear in the index document.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaEntry {
    pub key: String,
    pub dir: String,
    pub index: Option<String>,
    pub status: AreaStatus,
}

/// Read-only lookup of area lifecycle status. An absent or malformed index
/// degrades to an empty oracle that always answers `Unknown`, never an error.
#[derive(Clone, Debug, Default)]
pub struct AreaIndex {
    entries: Vec<AreaEntry>,
}

impl AreaIndex {
    pub fn empty() -> Self {
        AreaIndex::default()
    }

    /// Tolerant parse of the index document: entries without a usable `dir`
    /// are dropped, unrecognized statuses become `Unknown`.
    pub fn from_json(value: &Value) -> Self {
        let mut entries = Vec::new();
        let Some(areas) = value.get("areas").and_then(|v| v.as_array()) else {
            return AreaIndex::default();
        };

        for area in areas {
            let Some(dir) = area.get("dir").and_then(|v| v.as_str()) else {
                continue;
            };
            if dir.is_empty() {
                continue;
            }
            entries.push(AreaEntry {
                key: area
                    .get("key")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                dir: normalize_dir(dir),
                index: area
                    .get("index")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                status: parse_status(area.get("status").and_then(|v| v.as_str())),
            });
        }

        AreaIndex { entries }
    }

    /// Declared status of the area owning `path`.
    ///
    /// The candidate is normalized to exactly one trailing slash; an entry
    /// matches when either side is a prefix of the other, so a broad area
    /// contains a narrow reference and a short reference still hits a deeper
    /// area prefix. First matching entry in index order wins.
    pub fn status_of(&self, path: &str) -> AreaStatus {
        let normalized = normalize_dir(path);
        for entry in &self.entries {
            if normalized.starts_with(&entry.dir) || entry.dir.starts_with(&normalized) {
                return entry.status;
            }
        }
        AreaStatus::Unknown
    }

    pub fn entries(&self) -> &[AreaEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_dir(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

fn parse_status(status: Option<&str>) -> AreaStatus {
    match status {
        Some("active") => AreaStatus::Active,
        Some("inactive") => AreaStatus::Inactive,
        _ => AreaStatus::Unknown,
    }
}
