//! # gifpress
//!
//! Batch-compress animated GIFs in a folder to a target size budget.
//! gifpress contains no codec of its own — the actual pixel work is
//! delegated to [gifsicle](https://www.lcdf.org/gifsicle/), and this crate
//! owns everything around it: input enumeration, per-file temp workspaces,
//! the frame-drop policy, size-budget evaluation, and reporting.
//!
//! # The Per-File Pipeline
//!
//! Every eligible file goes through the same single pass inside its own
//! ephemeral workspace:
//!
//! ```text
//! 1. Explode   base.gif → base.gif.000, base.gif.001, …   (one file per frame)
//! 2. Filter    keep even-indexed frames, drop the rest    (2:1 temporal thinning)
//! 3. Merge     kept frames → name_compressed.gif          (lossy + global palette)
//! 4. Measure   final size vs the budget → ok / over budget / failed
//! ```
//!
//! Outputs land beside their originals with a `_compressed` marker in the
//! name; originals are never modified, and the marker keeps prior outputs
//! out of the next run's input set.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`budget`] | Size-budget string parsing (`"500kb"`, `"2mb"` → KB) |
//! | [`naming`] | `_compressed` output-name convention |
//! | [`scan`] | Eligible-input enumeration for a folder |
//! | [`workspace`] | RAII temp-directory guard, one per file |
//! | [`engine`] | gifsicle seam: explode/merge trait + subprocess driver |
//! | [`pipeline`] | The per-file explode → filter → merge → measure pass |
//! | [`batch`] | Sequential orchestration, progress events, cancellation |
//! | [`output`] | Progress-line and report-table formatting |
//!
//! # Design Decisions
//!
//! ## Engine as a Trait Seam
//!
//! The pipeline talks to gifsicle only through the [`engine::Engine`]
//! trait. The production implementation shells out with the workspace as
//! its working directory; the test implementation fabricates frame files
//! and scripted outputs. Everything above the seam — frame retention,
//! classification, workspace lifecycle, batch sequencing — is tested
//! without any external binary installed.
//!
//! ## Workspaces Are Guards, Not Cleanup Calls
//!
//! Intermediate frames for one file live in an exclusively owned temp
//! directory that is removed when its [`workspace::Workspace`] guard drops.
//! Success, budget miss, engine failure, and unwinding all release it the
//! same way, which is what makes the "no workspace survives its file" rule
//! an invariant instead of a convention.
//!
//! ## Single Pass, Fixed Policy
//!
//! The lossy level, palette size, frame delay, and the even/odd frame drop
//! are fixed policy constants. A run makes one attempt per file and
//! reports honestly: `over budget` is a real outcome, not a retry trigger.
//!
//! ## Strictly Sequential
//!
//! Files are processed one at a time, each through workspace release,
//! before the next starts. The accumulating report is the only state that
//! crosses iterations, and only the orchestrator touches it.

pub mod batch;
pub mod budget;
pub mod engine;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_helpers;
