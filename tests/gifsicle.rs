//! End-to-end tests against a real gifsicle binary.
//!
//! Everything above the engine seam is covered by unit tests with the mock
//! engine; these tests exercise the actual subprocess plumbing (working
//! directory, argument construction, exploded-frame naming). They are
//! ignored by default so the suite passes on machines without gifsicle:
//!
//! ```text
//! cargo test -- --ignored
//! ```

use gifpress::batch::{self, BatchOutcome, CancelFlag};
use gifpress::budget::SizeBudget;
use gifpress::engine::Gifsicle;
use gifpress::pipeline::FileStatus;
use std::fs;
use tempfile::TempDir;

/// Minimal valid two-frame GIF: two 1x1 frames over a 2-color global
/// palette. Enough for gifsicle to explode into two frame files.
fn two_frame_gif() -> Vec<u8> {
    let mut bytes = Vec::new();
    // Header + logical screen descriptor (1x1, 2-color global palette)
    bytes.extend_from_slice(b"GIF89a");
    bytes.extend_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00]);
    // Global color table: black, white
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF]);
    for _ in 0..2 {
        // Graphic control extension (delay 10/100 s)
        bytes.extend_from_slice(&[0x21, 0xF9, 0x04, 0x04, 0x0A, 0x00, 0x00, 0x00]);
        // Image descriptor (1x1 at origin) + 1-pixel image data
        bytes.extend_from_slice(&[
            0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
        ]);
        bytes.extend_from_slice(&[0x02, 0x02, 0x44, 0x01, 0x00]);
    }
    bytes.push(0x3B);
    bytes
}

#[test]
#[ignore] // Requires gifsicle
fn locate_finds_gifsicle() {
    Gifsicle::locate().unwrap();
}

#[test]
#[ignore] // Requires gifsicle
fn batch_compresses_a_real_gif() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("clip.gif"), two_frame_gif()).unwrap();

    let engine = Gifsicle::locate().unwrap();
    let outcome = batch::run_batch(
        &engine,
        tmp.path(),
        SizeBudget::from_kilobytes(500),
        &CancelFlag::new(),
        None,
    )
    .unwrap();

    let BatchOutcome::Report(report) = outcome else {
        panic!("expected a report");
    };
    assert_eq!(report.rows.len(), 1);
    // A two-frame 1x1 GIF lands well under any sane budget.
    assert_eq!(report.rows[0].status, FileStatus::Success);
    assert!(tmp.path().join("clip_compressed.gif").exists());
}

#[test]
#[ignore] // Requires gifsicle
fn original_bytes_untouched_and_workspace_removed() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("clip.gif");
    fs::write(&input, two_frame_gif()).unwrap();
    let before = fs::read(&input).unwrap();

    let engine = Gifsicle::locate().unwrap();
    batch::run_batch(
        &engine,
        tmp.path(),
        SizeBudget::DEFAULT,
        &CancelFlag::new(),
        None,
    )
    .unwrap();

    assert_eq!(fs::read(&input).unwrap(), before);
    let leftover_dirs: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .collect();
    assert!(leftover_dirs.is_empty());
}
