//! Scoped acquisition of the trees to survey.
//!
//! Every acquirer materializes its source inside a fresh temporary directory
//! owned by the returned [`AcquiredSource`]; dropping it deletes the tree.

mod archive;
mod git;
mod http;

pub use archive::ArchiveSource;
pub use git::GitSource;
pub use http::{HttpClient, ReqwestClient};

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, SurveyError};

const TEMP_PREFIX: &str = "php-survey-";

/// Produces a local directory tree from a location such as a URL.
pub trait SourceAcquirer {
    /// Fetch the source into a new temporary directory.
    ///
    /// # Errors
    /// Returns [`SurveyError::Acquisition`] if the source cannot be fetched or unpacked.
    fn acquire(&self, location: &str) -> Result<AcquiredSource>;
}

/// A temporary directory holding an acquired source tree.
#[derive(Debug)]
pub struct AcquiredSource {
    temp_dir: TempDir,
    root: PathBuf,
}

impl AcquiredSource {
    /// Create an empty temporary directory; the tree goes into `temp/<subdir>`.
    pub(crate) fn create(subdir: &str) -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempdir()
            .map_err(|e| SurveyError::Acquisition(format!("Failed to create temp directory: {e}")))?;
        let root = temp_dir.path().join(subdir);
        tracing::debug!("acquiring into {}", root.display());
        Ok(Self { temp_dir, root })
    }

    /// Root of the acquired tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Delete the temporary directory now, reporting any failure.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be removed.
    pub fn cleanup(self) -> Result<()> {
        let location = self.temp_dir.path().to_path_buf();
        self.temp_dir.close().map_err(|e| {
            SurveyError::Acquisition(format!(
                "Failed to remove temp directory {}: {e}",
                location.display()
            ))
        })
    }
}

/// Check if a string is an http:// or https:// URL.
#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquired_source_lives_under_prefixed_temp_dir() {
        let source = AcquiredSource::create("repo").unwrap();
        let parent = source.path().parent().unwrap();

        assert!(parent.exists());
        assert!(!source.path().exists());
        let name = parent.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(TEMP_PREFIX));
    }

    #[test]
    fn cleanup_removes_temp_dir() {
        let source = AcquiredSource::create("repo").unwrap();
        std::fs::create_dir_all(source.path()).unwrap();
        std::fs::write(source.path().join("a.php"), "<?php").unwrap();
        let parent = source.path().parent().unwrap().to_path_buf();

        source.cleanup().unwrap();

        assert!(!parent.exists());
    }

    #[test]
    fn drop_removes_temp_dir() {
        let source = AcquiredSource::create("archive").unwrap();
        let parent = source.path().parent().unwrap().to_path_buf();

        drop(source);

        assert!(!parent.exists());
    }

    #[test]
    fn remote_url_detection() {
        assert!(is_remote_url("https://example.com/project.zip"));
        assert!(is_remote_url("http://example.com/project.zip"));
        assert!(!is_remote_url("git@example.com:project.git"));
        assert!(!is_remote_url("/tmp/project.zip"));
    }
}
