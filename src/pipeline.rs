//! Per-file frame pipeline.
//!
//! Runs the three-stage transform for one input file inside an isolated
//! [`Workspace`]:
//!
//! ```text
//! 1. copy     input → workspace/base.gif
//! 2. explode  base.gif → base.gif.000, base.gif.001, …
//! 3. filter   keep even-indexed frames, delete odd-indexed ones
//! 4. merge    kept frames → output (lossy + global palette + fixed delay)
//! 5. measure  output size in KB, classify against the budget
//! ```
//!
//! Each step is a hard dependency on the previous one succeeding. Any
//! execution failure aborts the remaining steps for that file and
//! classifies as [`FileStatus::Error`] — the pipeline never propagates an
//! error to the batch, and the workspace guard is dropped on every path.
//!
//! The even/odd frame drop is a fixed 2:1 temporal thinning; combined with
//! the fixed merge policy it is a single pass that either meets the budget
//! or doesn't. There is no iterative tightening loop.

use crate::budget::SizeBudget;
use crate::engine::{Engine, EngineError, MergeOptions};
use crate::workspace::Workspace;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name the input is copied to inside the workspace before exploding.
const WORK_COPY: &str = "base.gif";

/// Outcome classification for one processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Output produced and within budget.
    Success,
    /// Output produced but larger than the budget.
    Warn,
    /// An engine invocation or filesystem step failed.
    Error,
}

/// Result of running the pipeline on one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOutcome {
    pub status: FileStatus,
    /// Final artifact size in KB; 0 on failure.
    pub final_kb: u64,
}

#[derive(Error, Debug)]
enum StageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Size of a file in whole kilobytes; 0 if it does not exist.
pub fn file_size_kb(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len() / 1024).unwrap_or(0)
}

/// Compress one input file to `output`, classifying the result against
/// `budget`.
///
/// Never fails outright: execution errors become [`FileStatus::Error`]
/// with a final size of 0. The input is only ever read; the single write
/// outside the workspace is the output artifact.
pub fn compress_file(
    engine: &impl Engine,
    input: &Path,
    output: &Path,
    budget: SizeBudget,
) -> FileOutcome {
    match run_stages(engine, input, output) {
        Ok(()) => {
            let final_kb = file_size_kb(output);
            let status = if final_kb <= budget.kilobytes() {
                FileStatus::Success
            } else {
                FileStatus::Warn
            };
            FileOutcome { status, final_kb }
        }
        Err(_) => FileOutcome {
            status: FileStatus::Error,
            final_kb: 0,
        },
    }
}

fn run_stages(engine: &impl Engine, input: &Path, output: &Path) -> Result<(), StageError> {
    // The engine runs with the workspace as its working directory, so the
    // output path must survive the directory change.
    let output = std::path::absolute(output)?;
    let parent = output.parent().unwrap_or(Path::new("."));
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "input".to_string());

    let workspace = Workspace::create(parent, &stem)?;

    fs::copy(input, workspace.join(WORK_COPY))?;
    engine.explode(workspace.path(), WORK_COPY)?;

    let kept = drop_odd_frames(&workspace)?;
    engine.merge(workspace.path(), &kept, &MergeOptions::default(), &output)?;
    Ok(())
}

/// Enumerate the exploded frames in temporal order, delete the odd-indexed
/// ones, and return the kept filenames in ascending order.
fn drop_odd_frames(workspace: &Workspace) -> Result<Vec<String>, StageError> {
    let mut frames: Vec<(u32, String)> = Vec::new();
    for entry in fs::read_dir(workspace.path())? {
        let name = entry?.file_name().to_string_lossy().to_string();
        if let Some(index) = frame_index(&name) {
            frames.push((index, name));
        }
    }
    frames.sort();

    let mut kept = Vec::new();
    for (position, (_, name)) in frames.iter().enumerate() {
        if position % 2 == 0 {
            kept.push(name.clone());
        } else {
            fs::remove_file(workspace.join(name))?;
        }
    }
    Ok(kept)
}

/// Parse the numeric suffix of an exploded frame name
/// (`base.gif.017` → 17).
///
/// gifsicle pads indices to three digits but grows to four past frame 999,
/// where a string sort would put `1000` before `999` — ordering must use
/// the parsed index.
fn frame_index(name: &str) -> Option<u32> {
    name.strip_prefix(WORK_COPY)?
        .strip_prefix('.')?
        .parse()
        .ok()
}
