//! Fixtures for populating package index directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Create an empty file named `filename` inside `dir`.
pub fn touch(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, b"").unwrap();
    path
}

/// Create a file named `filename` inside `dir` with `content`.
pub fn create_archive(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}
