mod directory;
mod filter;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, SurveyFilter};
pub use types::{ScanResult, SkippedFile, TraversalOrder};

use std::path::Path;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Walk a directory and return all eligible file paths.
    ///
    /// Entries that cannot be walked are reported in [`ScanResult::skipped`]
    /// instead of failing the scan.
    ///
    /// # Errors
    /// Implementations may fail if the walk cannot start at all.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}
