use std::path::Path;

use walkdir::WalkDir;

use super::{FileFilter, FileScanner, ScanResult, SkippedFile, TraversalOrder};
use crate::error::Result;

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    follow_links: bool,
    order: TraversalOrder,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            follow_links: true,
            order: TraversalOrder::Unordered,
        }
    }

    /// Follow symbolic links while walking. Link cycles are reported as
    /// skipped entries rather than followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    #[must_use]
    pub const fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    fn walker(&self, root: &Path) -> WalkDir {
        let walker = WalkDir::new(root).follow_links(self.follow_links);
        match self.order {
            TraversalOrder::Unordered => walker,
            TraversalOrder::Ascending => walker.sort_by_file_name(),
            TraversalOrder::Descending => {
                walker.sort_by(|a, b| b.file_name().cmp(a.file_name()))
            }
        }
    }

    fn scan_impl(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();

        for entry in self.walker(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    let reason = if e.loop_ancestor().is_some() {
                        "symbolic link loop".to_string()
                    } else {
                        e.to_string()
                    };
                    tracing::warn!("skipping {}: {reason}", path.display());
                    result.skipped.push(SkippedFile::new(path, reason));
                    continue;
                }
            };

            // Excludes are matched relative to the root, never against its ancestors.
            let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
            if entry.file_type().is_file() && self.filter.should_include(relative) {
                result.files.push(entry.into_path());
            }
        }

        result
    }
}

impl<F: FileFilter + Send + Sync> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
