use std::path::PathBuf;

use serde::Serialize;

/// An entry the survey could not process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result of walking a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Eligible files, in discovery order.
    pub files: Vec<PathBuf>,
    /// Entries that could not be walked (unreadable directories, broken links, loops).
    pub skipped: Vec<SkippedFile>,
}

/// Order in which sibling entries are visited.
///
/// Counts never depend on it; the ordered variants exist so the walk can be
/// made reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Whatever order the filesystem returns.
    #[default]
    Unordered,
    /// Sorted by file name, ascending.
    Ascending,
    /// Sorted by file name, descending.
    Descending,
}
