use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One program from the `TitleMedium` feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "TID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Name of the per-program directory: `"{id} {title}"`.
    pub fn directory_name(&self) -> String {
        format!("{} {}", self.id, self.title)
    }
}

/// Wire shape of `json.php?Req=TitleMedium`. Keys of `Titles` are not used.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleMediumResponse {
    #[serde(rename = "Titles")]
    pub titles: HashMap<String, CatalogEntry>,
}

impl TitleMediumResponse {
    /// Entries ordered by id then title, so overlapping titles resolve the
    /// same way on every run.
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        let mut entries: Vec<CatalogEntry> = self.titles.into_values().collect();
        entries.sort();
        entries
    }
}

/// Names of the root directory's immediate entries, taken once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub names: Vec<String>,
}

impl DirectoryListing {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOperation {
    pub entry: CatalogEntry,
    pub file_name: String,
    pub source_path: PathBuf,
    pub destination_dir: PathBuf,
    pub destination_path: PathBuf,
}

/// A catalog entry whose pattern could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub entry: CatalogEntry,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SortPlan {
    pub operations: Vec<MoveOperation>,
    pub skipped: Vec<SkippedEntry>,
    /// Set when the root directory could not be listed; nothing is planned.
    pub listing_error: Option<String>,
    pub listed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    Moved,
    Planned,
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub operation: MoveOperation,
    pub status: MoveStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SortReport {
    pub catalog_size: usize,
    pub listed: usize,
    pub outcomes: Vec<MoveOutcome>,
    pub skipped: Vec<SkippedEntry>,
    pub directory_failures: Vec<DirectoryFailure>,
    pub listing_error: Option<String>,
    pub dry_run: bool,
}

impl SortReport {
    pub fn moved(&self) -> usize {
        self.count(|s| *s == MoveStatus::Moved)
    }

    pub fn planned(&self) -> usize {
        self.count(|s| *s == MoveStatus::Planned)
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, MoveStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&MoveStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
