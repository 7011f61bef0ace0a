//! Centralized output-filename convention.
//!
//! Compressed artifacts are written beside their originals with a
//! `_compressed` marker inserted before the extension:
//!
//! ```text
//! clip.gif  →  clip_compressed.gif
//! ```
//!
//! The marker does double duty: it also identifies prior outputs, so a
//! re-run over the same folder never compresses an already-compressed file.
//! Both sides of the convention live here so they cannot drift apart.

/// Marker substring identifying a compressed output file.
pub const COMPRESSED_MARKER: &str = "_compressed";

/// Derive the output filename for an input filename.
///
/// The marker is inserted before the last extension; names without an
/// extension get the marker appended:
/// - `"clip.gif"` → `"clip_compressed.gif"`
/// - `"archive.old.gif"` → `"archive.old_compressed.gif"`
/// - `"noext"` → `"noext_compressed"`
pub fn output_name(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            format!("{stem}{COMPRESSED_MARKER}.{ext}")
        }
        _ => format!("{filename}{COMPRESSED_MARKER}"),
    }
}

/// Whether a filename carries the compressed-output marker.
///
/// A substring test: even a file the user named
/// `already_compressed.gif` is treated as an output and skipped.
pub fn is_compressed_output(filename: &str) -> bool {
    filename.contains(COMPRESSED_MARKER)
}
