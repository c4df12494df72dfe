#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the php-survey binary.
#[macro_export]
macro_rules! php_survey {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("php-survey"))
    };
}

/// Two calls opened on one line: one `S(S(n` occurrence.
pub const NESTED_CALL: &str = "<?php\n$x = array_map(trim(\n    $value));\n";

/// One call opened per line: one `S(nS(n` occurrence.
pub const CALL_PER_LINE: &str = "<?php\n$x = array_map(\n    trim(\n        $value));\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a php-survey config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".php-survey.toml", content);
    }

    /// Writes a zip archive holding the given files and returns its path.
    pub fn create_zip(&self, relative_path: &str, files: &[(&str, &str)]) -> std::path::PathBuf {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            writer
                .start_file(*name, zip::write::SimpleFileOptions::default())
                .expect("Failed to start zip entry");
            writer
                .write_all(content.as_bytes())
                .expect("Failed to write zip entry");
        }
        let bytes = writer.finish().expect("Failed to finish zip").into_inner();
        let path = self.dir.path().join(relative_path);
        fs::write(&path, bytes).expect("Failed to write zip");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
