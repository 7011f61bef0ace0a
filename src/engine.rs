//! External compression engine seam.
//!
//! gifpress contains no codec of its own. All pixel work is delegated to
//! [gifsicle](https://www.lcdf.org/gifsicle/), driven through two primitive
//! operations:
//!
//! - **explode** — split a multi-frame GIF into one single-frame file per
//!   frame (`base.gif` → `base.gif.000`, `base.gif.001`, …)
//! - **merge** — recombine single-frame files into one animation with a
//!   shared global palette, lossy re-encoding, and a fixed per-frame delay
//!
//! The [`Engine`] trait is the seam between the pipeline (which decides
//! *what* to run) and the subprocess plumbing (which runs it). The
//! production implementation is [`Gifsicle`]; tests substitute
//! [`tests::MockEngine`], which fabricates frame files and scripted outputs
//! without touching any external binary.
//!
//! Both operations run with the working directory set to the workspace and
//! both streams discarded; a non-zero exit is a failure.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("engine invocation failed: {0}")]
    Failed(String),
    #[error("gifsicle is not installed. {0}")]
    NotInstalled(String),
}

/// Fixed re-merge policy.
///
/// These are policy constants, not values derived from the achieved size:
/// a single pass either meets the budget or it doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Lossy re-encoding aggressiveness (`--lossy`).
    pub lossy: u32,
    /// Maximum global palette size (`--colors`).
    pub colors: u32,
    /// Per-frame display delay in hundredths of a second (`--delay`).
    pub delay: u32,
    /// gifsicle optimization level (`-O<n>`).
    pub optimize: u8,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            lossy: 120,
            colors: 256,
            delay: 8,
            optimize: 3,
        }
    }
}

/// The two primitive operations the pipeline needs from the external tool.
pub trait Engine {
    /// Split `input` (a filename inside `workdir`) into per-frame files,
    /// written into `workdir`.
    fn explode(&self, workdir: &Path, input: &str) -> Result<(), EngineError>;

    /// Recombine `frames` (filenames inside `workdir`, in temporal order)
    /// into a single animation at `output`, an absolute path outside the
    /// workspace.
    fn merge(
        &self,
        workdir: &Path,
        frames: &[String],
        options: &MergeOptions,
        output: &Path,
    ) -> Result<(), EngineError>;
}

/// Production engine: shells out to the gifsicle binary.
#[derive(Debug, Clone)]
pub struct Gifsicle {
    program: PathBuf,
}

impl Gifsicle {
    pub const PROGRAM: &'static str = "gifsicle";

    /// Resolve gifsicle on `PATH`.
    ///
    /// This is the preflight check: a miss yields
    /// [`EngineError::NotInstalled`] with a per-platform install hint, so
    /// the batch fails before any file is touched rather than on the first
    /// invocation.
    pub fn locate() -> Result<Gifsicle, EngineError> {
        match which::which(Self::PROGRAM) {
            Ok(program) => Ok(Gifsicle { program }),
            Err(_) => Err(EngineError::NotInstalled(install_hint().to_string())),
        }
    }

    /// Use a specific binary path (tests, non-PATH installs).
    pub fn at(program: impl Into<PathBuf>) -> Gifsicle {
        Gifsicle {
            program: program.into(),
        }
    }

    fn run(
        &self,
        workdir: &Path,
        args: impl IntoIterator<Item = OsString>,
    ) -> Result<(), EngineError> {
        let status = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(EngineError::Failed(format!(
                "{} exited with {status}",
                Self::PROGRAM
            )))
        }
    }
}

impl Engine for Gifsicle {
    fn explode(&self, workdir: &Path, input: &str) -> Result<(), EngineError> {
        self.run(workdir, ["--explode".into(), input.into()])
    }

    fn merge(
        &self,
        workdir: &Path,
        frames: &[String],
        options: &MergeOptions,
        output: &Path,
    ) -> Result<(), EngineError> {
        self.run(workdir, merge_args(frames, options, output))
    }
}

/// Build the argument list for a merge invocation.
///
/// A pure function: the exact command line is unit-testable without
/// spawning anything.
pub fn merge_args(frames: &[String], options: &MergeOptions, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--merge".into(),
        format!("-O{}", options.optimize).into(),
        format!("--lossy={}", options.lossy).into(),
        format!("--colors={}", options.colors).into(),
        format!("--delay={}", options.delay).into(),
    ];
    args.extend(frames.iter().map(OsString::from));
    args.push("-o".into());
    args.push(output.as_os_str().to_os_string());
    args
}

fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "Install it with: brew install gifsicle"
    } else if cfg!(target_os = "linux") {
        "Install it with: sudo apt install gifsicle"
    } else {
        "Download it from: https://www.lcdf.org/gifsicle/"
    }
}
