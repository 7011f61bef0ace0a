//! Shared test utilities for the gifpress test suite.
//!
//! Fixture builders for folders of fake GIF files (the mock engine never
//! reads their bytes, so the content only needs to exist and have a
//! measurable size), plus lookup helpers that panic with a clear message
//! on a miss.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::batch::{BatchReport, FileResult};

/// Create a temp folder containing fake GIF files with the given names.
pub fn gif_folder(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        write_gif(tmp.path(), name);
    }
    tmp
}

/// Write a small fake GIF file and return its path.
pub fn write_gif(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"GIF89a fake image data").unwrap();
    path
}

/// Write a fake GIF file of exactly `kb` kilobytes.
pub fn write_sized_gif(dir: &Path, name: &str, kb: u64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0u8; (kb * 1024) as usize]).unwrap();
    path
}

/// Names of all subdirectories directly inside `dir`.
///
/// Used to assert that no workspace survives a pipeline run.
pub fn subdirs(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect()
}

/// Find a report row by filename. Panics if not found.
pub fn find_row<'a>(report: &'a BatchReport, filename: &str) -> &'a FileResult {
    report
        .rows
        .iter()
        .find(|r| r.filename == filename)
        .unwrap_or_else(|| {
            let names: Vec<&str> = report.rows.iter().map(|r| r.filename.as_str()).collect();
            panic!("row '{filename}' not found. Available: {names:?}")
        })
}
