use std::cell::RefCell;
use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::*;

struct MockClient {
    body: Option<Vec<u8>>,
    requested: RefCell<Vec<String>>,
}

impl MockClient {
    fn serving(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            requested: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl HttpClient for MockClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requested.borrow_mut().push(url.to_string());
        self.body
            .clone()
            .ok_or_else(|| SurveyError::Acquisition(format!("Failed to download {url}: HTTP 404")))
    }
}

fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn acquire_downloads_and_extracts_remote_archive() {
    let body = zip_bytes(&[
        ("project/index.php", "<?php\nfoo(bar(\n  x));\n"),
        ("project/src/Model.php", "<?php\n"),
    ]);
    let client = MockClient::serving(body);
    let acquirer = ArchiveSource::with_client(client);

    let source = acquirer
        .acquire("https://example.com/project.zip")
        .unwrap();

    assert!(source.path().join("project/index.php").is_file());
    assert!(source.path().join("project/src/Model.php").is_file());
    assert_eq!(
        acquirer.client.requested.borrow().as_slice(),
        ["https://example.com/project.zip"]
    );
}

#[test]
fn acquire_reads_local_archive_without_network() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("project.zip");
    std::fs::write(&archive_path, zip_bytes(&[("a.php", "<?php\n")])).unwrap();
    let acquirer = ArchiveSource::with_client(MockClient::failing());

    let source = acquirer.acquire(archive_path.to_str().unwrap()).unwrap();

    assert!(source.path().join("a.php").is_file());
    assert!(acquirer.client.requested.borrow().is_empty());
}

#[test]
fn acquire_propagates_download_failure() {
    let acquirer = ArchiveSource::with_client(MockClient::failing());

    let result = acquirer.acquire("https://example.com/missing.zip");

    assert!(matches!(result, Err(SurveyError::Acquisition(_))));
}

#[test]
fn acquire_rejects_invalid_archive() {
    let acquirer = ArchiveSource::with_client(MockClient::serving(b"not a zip".to_vec()));

    let result = acquirer.acquire("https://example.com/broken.zip");

    match result {
        Err(SurveyError::Acquisition(message)) => assert!(message.contains("Invalid zip archive")),
        other => panic!("expected acquisition error, got {other:?}"),
    }
}

#[test]
fn acquire_missing_local_archive_fails() {
    let acquirer = ArchiveSource::with_client(MockClient::failing());

    let result = acquirer.acquire("/definitely/not/here.zip");

    assert!(matches!(result, Err(SurveyError::Acquisition(_))));
}

#[test]
fn acquired_archive_is_removed_on_cleanup() {
    let body = zip_bytes(&[("a.php", "<?php\n")]);
    let acquirer = ArchiveSource::with_client(MockClient::serving(body));

    let source = acquirer.acquire("http://example.com/a.zip").unwrap();
    let temp_root = source.path().parent().unwrap().to_path_buf();
    source.cleanup().unwrap();

    assert!(!temp_root.exists());
}
