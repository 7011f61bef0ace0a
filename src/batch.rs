//! Batch orchestration.
//!
//! Drives the frame pipeline over every eligible file in a folder, strictly
//! one at a time, and aggregates the per-file results into a
//! [`BatchReport`]. Per-file failures never abort the batch: a file whose
//! engine invocation fails is recorded as an `Error` row and the next file
//! starts with a fresh workspace.
//!
//! # Computation vs display
//!
//! The orchestrator never prints. Progress crosses to the presentation
//! layer as [`BatchEvent`]s over an optional channel sender, and the final
//! report is returned as plain data for [`output`](crate::output) to
//! render. This keeps every decision in this module directly assertable in
//! tests.
//!
//! # Cancellation
//!
//! A shared [`CancelFlag`] is checked between file iterations: flipping it
//! stops the batch before the next file starts and marks the report
//! `interrupted`. The file in flight still finishes (and its workspace is
//! released) — there is no mid-pipeline abort.

use crate::budget::SizeBudget;
use crate::engine::Engine;
use crate::naming;
use crate::pipeline::{self, FileStatus};
use crate::scan::{self, ScanError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

/// Cooperative cancellation token, checked between file iterations.
///
/// Clones share the same flag; any thread may flip it.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> CancelFlag {
        CancelFlag::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One row of the batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// 1-based position in enumeration order.
    pub seq: usize,
    pub filename: String,
    pub original_kb: u64,
    /// 0 when the pipeline failed.
    pub final_kb: u64,
    pub status: FileStatus,
}

/// Terminal artifact of a batch run.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Folder holding both the inputs and their outputs.
    pub folder: PathBuf,
    /// One row per input, in enumeration order.
    pub rows: Vec<FileResult>,
    /// True when cancellation stopped the batch before the last file.
    pub interrupted: bool,
}

/// Result of a batch run. An empty folder is a distinct nothing-to-do
/// signal, not an error and not an empty report.
#[derive(Debug)]
pub enum BatchOutcome {
    Report(BatchReport),
    NoMatchingFiles,
}

/// Progress events emitted while the batch runs.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    FileStarted {
        seq: usize,
        total: usize,
        filename: String,
    },
    FileFinished {
        result: FileResult,
    },
}

/// Process every eligible file in `folder` against `budget`.
///
/// Outputs land beside their inputs under the
/// [`_compressed`](crate::naming::COMPRESSED_MARKER) naming convention.
/// Originals are never modified or moved.
pub fn run_batch(
    engine: &impl Engine,
    folder: &Path,
    budget: SizeBudget,
    cancel: &CancelFlag,
    events: Option<Sender<BatchEvent>>,
) -> Result<BatchOutcome, ScanError> {
    let inputs = scan::scan(folder)?;
    if inputs.is_empty() {
        return Ok(BatchOutcome::NoMatchingFiles);
    }

    let total = inputs.len();
    let mut rows = Vec::with_capacity(total);
    let mut interrupted = false;

    for (idx, input) in inputs.iter().enumerate() {
        if cancel.is_cancelled() {
            interrupted = true;
            break;
        }

        let seq = idx + 1;
        let filename = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        emit(
            &events,
            BatchEvent::FileStarted {
                seq,
                total,
                filename: filename.clone(),
            },
        );

        let original_kb = pipeline::file_size_kb(input);
        let output = folder.join(naming::output_name(&filename));
        let outcome = pipeline::compress_file(engine, input, &output, budget);

        let result = FileResult {
            seq,
            filename,
            original_kb,
            final_kb: outcome.final_kb,
            status: outcome.status,
        };
        emit(
            &events,
            BatchEvent::FileFinished {
                result: result.clone(),
            },
        );
        rows.push(result);
    }

    Ok(BatchOutcome::Report(BatchReport {
        folder: folder.to_path_buf(),
        rows,
        interrupted,
    }))
}

fn emit(events: &Option<Sender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is watching progress.
        let _ = tx.send(event);
    }
}
