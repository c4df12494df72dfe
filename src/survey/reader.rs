use std::path::Path;

/// Source of file contents for a survey.
pub trait FileReader {
    /// Read the full raw content of a file.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be read.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads straight from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
