use std::io::Cursor;
use std::path::Path;

use zip::ZipArchive;

use super::{AcquiredSource, HttpClient, ReqwestClient, SourceAcquirer, is_remote_url};
use crate::error::{Result, SurveyError};

/// Acquires a tree from a zip archive, downloaded or read from disk.
#[derive(Debug, Default)]
pub struct ArchiveSource<C: HttpClient = ReqwestClient> {
    client: C,
}

impl ArchiveSource<ReqwestClient> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            client: ReqwestClient,
        }
    }
}

impl<C: HttpClient> ArchiveSource<C> {
    #[must_use]
    pub const fn with_client(client: C) -> Self {
        Self { client }
    }

    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        if is_remote_url(location) {
            tracing::info!("downloading {location}");
            return self.client.get(location);
        }

        std::fs::read(location)
            .map_err(|e| SurveyError::Acquisition(format!("Failed to read archive {location}: {e}")))
    }
}

/// Unpack a zip archive into `destination`.
///
/// Entries whose names would escape `destination` make extraction fail.
///
/// # Errors
/// Returns [`SurveyError::Acquisition`] if the bytes are not a valid zip archive
/// or an entry cannot be written.
fn extract_zip(bytes: Vec<u8>, destination: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| SurveyError::Acquisition(format!("Invalid zip archive: {e}")))?;
    let entries = archive.len();
    archive
        .extract(destination)
        .map_err(|e| SurveyError::Acquisition(format!("Failed to extract archive: {e}")))?;
    Ok(entries)
}

impl<C: HttpClient> SourceAcquirer for ArchiveSource<C> {
    fn acquire(&self, location: &str) -> Result<AcquiredSource> {
        let bytes = self.fetch(location)?;
        let source = AcquiredSource::create("archive")?;
        std::fs::create_dir_all(source.path()).map_err(|e| {
            SurveyError::Acquisition(format!("Failed to create {}: {e}", source.path().display()))
        })?;

        let entries = extract_zip(bytes, source.path())?;
        tracing::info!("extracted {entries} entries from {location}");
        Ok(source)
    }
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
