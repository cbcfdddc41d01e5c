//! `McOutputObserver<W>` — bridges `TrialObserver` to an `OutputWriter`.

use dp_mc::{SummaryStatistics, TrialObserver, TrialRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TrialRow};

/// A [`TrialObserver`] that streams every trial to an [`OutputWriter`] and
/// finishes the writer when the run ends.
///
/// Errors from the writer are stored internally because `TrialObserver`
/// methods have no return value.  After `run_with` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct McOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> McOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrialObserver for McOutputObserver<W> {
    fn on_trial(&mut self, record: &TrialRecord) {
        let result = self.writer.write_trial(&TrialRow::from(record));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &SummaryStatistics) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
