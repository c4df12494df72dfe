use std::sync::atomic::AtomicBool;

use super::{AcquiredSource, SourceAcquirer};
use crate::error::{Result, SurveyError};

/// Acquires a tree by cloning a git repository.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSource;

impl GitSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SourceAcquirer for GitSource {
    fn acquire(&self, location: &str) -> Result<AcquiredSource> {
        if location.trim().is_empty() {
            return Err(SurveyError::Acquisition(
                "Repository URL must not be empty".to_string(),
            ));
        }

        let source = AcquiredSource::create("repo")?;
        let interrupt = AtomicBool::new(false);
        tracing::info!("cloning {location}");

        let mut prepare = gix::prepare_clone(location, source.path()).map_err(|e| {
            SurveyError::Acquisition(format!("Invalid repository {location}: {e}"))
        })?;
        let (mut checkout, _) = prepare
            .fetch_then_checkout(gix::progress::Discard, &interrupt)
            .map_err(|e| SurveyError::Acquisition(format!("Failed to fetch {location}: {e}")))?;
        let (repo, _) = checkout
            .main_worktree(gix::progress::Discard, &interrupt)
            .map_err(|e| {
                SurveyError::Acquisition(format!("Failed to check out {location}: {e}"))
            })?;

        if let Some(workdir) = repo.workdir() {
            tracing::debug!("checked out {location} into {}", workdir.display());
        }
        Ok(source)
    }
}
