//! Size-budget parsing.
//!
//! The target size for a batch is supplied as a human-readable string like
//! `"500kb"` or `"2mb"`. This module converts it into a canonical unit
//! (whole kilobytes) exactly once; the resulting [`SizeBudget`] is immutable
//! for the rest of the run.
//!
//! The grammar is forgiving: a leading unsigned integer with an optional
//! `b`/`kb`/`mb` suffix, case-insensitive, surrounding whitespace ignored,
//! trailing junk tolerated. Anything that doesn't fit falls back to the
//! 500 KB default — the parser never fails, so the batch always has a
//! usable budget.

use serde::Serialize;

/// A compression target expressed in whole kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SizeBudget(u64);

impl SizeBudget {
    /// Fallback budget when the input cannot be parsed.
    pub const DEFAULT: SizeBudget = SizeBudget(500);

    /// Budget of exactly `kb` kilobytes.
    pub fn from_kilobytes(kb: u64) -> SizeBudget {
        SizeBudget(kb)
    }

    pub fn kilobytes(self) -> u64 {
        self.0
    }

    /// Parse a human size string into kilobytes.
    ///
    /// Unit semantics:
    /// - `"2mb"` → 2048 (× 1024)
    /// - `"500kb"` or `"500"` → 500 (unchanged)
    /// - `"900b"` → 0 (÷ 1024, floor — sub-kilobyte budgets resolve to zero)
    ///
    /// No decimals, no negatives. Unrecognized input (empty, non-numeric)
    /// yields [`SizeBudget::DEFAULT`].
    pub fn parse(text: &str) -> SizeBudget {
        let text = text.trim().to_ascii_lowercase();
        let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
        let Ok(value) = digits.parse::<u64>() else {
            return SizeBudget::DEFAULT;
        };

        // Unit is matched as a prefix of the remainder, so "500kbs" still
        // reads as kilobytes — same tolerance as the rest of the grammar.
        let rest = text[digits.len()..].trim_start();
        if rest.starts_with("mb") {
            SizeBudget(value.saturating_mul(1024))
        } else if rest.starts_with("kb") {
            SizeBudget(value)
        } else if rest.starts_with('b') {
            SizeBudget(value / 1024)
        } else {
            SizeBudget(value)
        }
    }
}

impl Default for SizeBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for SizeBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} KB", self.0)
    }
}
