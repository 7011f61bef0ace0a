//! CLI output formatting.
//!
//! Two surfaces: per-file progress lines streamed while the batch runs
//! (fed by [`BatchEvent`]s) and the final tabular report.
//!
//! Each surface has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! [1/3] clip.gif
//!     ok: 1200 KB → 300 KB
//! [2/3] broken.gif
//!     failed
//! [3/3] big.gif
//!     over budget: 2100 KB → 600 KB
//!
//!   #  File        Original     Final  Status
//!   1  clip.gif     1200 KB    300 KB  ok
//!   2  broken.gif    800 KB      0 KB  failed
//!   3  big.gif      2100 KB    600 KB  over budget
//!
//! Compressed files saved in: /path/to/folder
//! ```

use crate::batch::{BatchEvent, BatchReport};
use crate::pipeline::FileStatus;
use std::path::Path;

/// Human label for a file status.
pub fn status_label(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Success => "ok",
        FileStatus::Warn => "over budget",
        FileStatus::Error => "failed",
    }
}

/// Format one progress event as display lines.
pub fn format_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::FileStarted {
            seq,
            total,
            filename,
        } => {
            vec![format!("[{seq}/{total}] {filename}")]
        }
        BatchEvent::FileFinished { result } => {
            let line = match result.status {
                FileStatus::Error => format!("    {}", status_label(result.status)),
                _ => format!(
                    "    {}: {} KB \u{2192} {} KB",
                    status_label(result.status),
                    result.original_kb,
                    result.final_kb
                ),
            };
            vec![line]
        }
    }
}

/// Format the final report as an aligned table plus footer.
pub fn format_report(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();

    let name_width = report
        .rows
        .iter()
        .map(|r| r.filename.len())
        .chain(std::iter::once("File".len()))
        .max()
        .unwrap_or(4);

    lines.push(format!(
        "{:>3}  {:<name_width$}  {:>8}  {:>8}  Status",
        "#", "File", "Original", "Final"
    ));
    for row in &report.rows {
        lines.push(format!(
            "{:>3}  {:<name_width$}  {:>5} KB  {:>5} KB  {}",
            row.seq,
            row.filename,
            row.original_kb,
            row.final_kb,
            status_label(row.status)
        ));
    }

    lines.push(String::new());
    if report.interrupted {
        lines.push(format!(
            "Batch interrupted after {} file(s).",
            report.rows.len()
        ));
    }
    lines.push(format!(
        "Compressed files saved in: {}",
        report.folder.display()
    ));

    lines
}

/// Message for a folder with no eligible inputs.
pub fn format_no_matches(folder: &Path) -> String {
    format!("No GIF files to compress in {}", folder.display())
}

/// Print the final report to stdout.
pub fn print_report(report: &BatchReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
