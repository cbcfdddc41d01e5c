//! Trial observer trait for instrumentation and streaming output.

use crate::{SummaryStatistics, TrialRecord};

/// Callbacks invoked by [`MonteCarlo::run_with`][crate::MonteCarlo::run_with].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Trials are always reported in trial order,
/// including when evaluation ran in parallel.
///
/// # Example — clamp counter
///
/// ```rust,ignore
/// struct ClampCounter(usize);
///
/// impl TrialObserver for ClampCounter {
///     fn on_trial(&mut self, record: &TrialRecord) {
///         if record.was_clamped() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once per trial after its simulation completes.
    fn on_trial(&mut self, _record: &TrialRecord) {}

    /// Called once after the summary has been computed.
    fn on_run_end(&mut self, _summary: &SummaryStatistics) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}

/// Collect every trial record.
impl TrialObserver for Vec<TrialRecord> {
    fn on_trial(&mut self, record: &TrialRecord) {
        self.push(*record);
    }
}
