use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SurveyError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files with the survey extension (case-insensitive) that no exclude
/// pattern matches.
pub struct SurveyFilter {
    extension: String,
    exclude_patterns: GlobSet,
}

impl SurveyFilter {
    /// Create a new filter for the given extension and exclude patterns.
    ///
    /// The extension may be given with or without its leading dot.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extension: &str, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SurveyError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| SurveyError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extension: extension.trim_start_matches('.').to_string(),
            exclude_patterns,
        })
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// A bare dotfile such as `.php` counts as having that extension.
    fn has_survey_extension(&self, path: &Path) -> bool {
        let extension = path.extension().or_else(|| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix('.'))
                .map(std::ffi::OsStr::new)
        });
        extension
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SurveyFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_survey_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
