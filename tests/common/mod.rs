use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_folder() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_test_file(folder: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = folder.join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn pdfmatch_cmd() -> Command {
    Command::cargo_bin("pdfmatch").expect("failed to find binary")
}
