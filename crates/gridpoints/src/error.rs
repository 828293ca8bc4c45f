//! Error type shared by every grid constructor.

use std::result;

use thiserror::Error;

use crate::mode::GridMode;

/// Errors raised when a grid is built from inconsistent input.
///
/// Empty or inverted boxes are not errors: they produce an iterator that is
/// exhausted from the start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Bounds, counts or axis lists disagree on the number of axes.
    #[error("dimension mismatch: expected {expected} axes, got {got}")]
    DimensionMismatch {
        /// Number of axes required by the grid.
        expected: usize,
        /// Number of axes supplied.
        got: usize,
    },
    /// A per-axis sample count does not fit the lattice index type.
    #[error("sample count {0} exceeds the lattice index range")]
    CountOverflow(usize),
    /// The requested operation has no meaning in the given mode.
    #[error("{operation} is not supported in {mode} mode")]
    UnsupportedMode {
        /// Operation that was requested.
        operation: &'static str,
        /// Mode it was requested in.
        mode: GridMode,
    },
    /// A mode name did not match any known mode.
    #[error("unknown grid mode '{0}'")]
    UnknownMode(String),
}

/// Result alias used across the crate.
pub type Result<T> = result::Result<T, Error>;
