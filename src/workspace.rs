//! Per-file temporary workspace lifecycle.
//!
//! Every input file is processed inside its own ephemeral directory holding
//! the working copy and the exploded frame artifacts. The directory is
//! exclusively owned by one pipeline invocation and must be gone before the
//! orchestrator moves to the next file — on success, on a budget miss, and
//! on every failure path.
//!
//! [`Workspace`] models that as an RAII guard: creation acquires the
//! directory, `Drop` removes it recursively. Early returns, `?` propagation,
//! and unwinding all release it without any explicit cleanup call.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonic per-process suffix so rapid successive workspaces for the same
/// input within one clock second still get distinct names.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Ephemeral working directory for one file's processing attempt.
///
/// Removed recursively, contents included, when the guard drops.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    /// Create a fresh workspace in `parent`, named after the input's stem
    /// plus a time-based unique suffix.
    pub fn create(parent: &Path, stem: &str) -> io::Result<Workspace> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self::create_at(parent.join(format!("temp_{stamp}-{id}_{stem}")))
    }

    /// Acquire `path` as a workspace directory. A leftover directory of the
    /// exact same name (e.g. from a killed earlier run) is removed first.
    fn create_at(path: PathBuf) -> io::Result<Workspace> {
        if path.exists() {
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        Ok(Workspace { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file inside the workspace.
    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        // Removal failure is unreportable from Drop; a leftover directory
        // of the same name is replaced by the next run anyway.
        let _ = fs::remove_dir_all(&self.path);
    }
}
