//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PathRow, TrialRow};

pub trait OutputWriter {
    /// Write the rows of one simulated path.
    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()>;

    /// Write one Monte Carlo trial row.
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
