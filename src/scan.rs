//! Input enumeration.
//!
//! Finds the GIF files eligible for compression directly inside the batch
//! folder. Eligibility is a filename decision only: the extension must be
//! `.gif` (case-insensitive) and the name must not carry the
//! [`_compressed`](crate::naming::COMPRESSED_MARKER) marker, so outputs of a
//! previous run are never fed back in.
//!
//! Files come back in filesystem-enumeration order — not sorted, and not
//! guaranteed stable across filesystems. Within one run the orchestrator
//! uses this single order for sequence numbering and reporting.

use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const INPUT_EXTENSION: &str = "gif";

/// Enumerate eligible input files directly inside `folder`.
///
/// Subdirectories are not descended into. An empty result is a valid
/// outcome, not an error; the orchestrator turns it into its
/// nothing-to-do signal.
pub fn scan(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !folder.is_dir() {
        return Err(ScanError::NotADirectory(folder.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if is_input(&path) {
            inputs.push(path);
        }
    }
    Ok(inputs)
}

fn is_input(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let is_gif = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case(INPUT_EXTENSION))
        .unwrap_or(false);
    if !is_gif {
        return false;
    }
    path.file_name()
        .map(|n| !naming::is_compressed_output(&n.to_string_lossy()))
        .unwrap_or(false)
}
