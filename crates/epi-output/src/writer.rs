//! The `OutputWriter` trait implemented by output backends.

use crate::{InfectionRow, OutputResult, PersonSnapshotRow, StepSummaryRow};

/// Trait implemented by output writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    fn write_infection(&mut self, row: &InfectionRow) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write a batch of person snapshots.
    fn write_snapshots(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
