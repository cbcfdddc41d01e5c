//! Per-period observer for diagnosing a single simulation.

use dp_core::Year;

/// Flows and closing stocks of one simulated year.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PeriodFlows {
    pub year:         Year,
    /// Newly displaced workers entering unemployment this year.
    pub new_unemp:    f64,
    /// Newly displaced workers leaving the labor force this year.
    pub new_nilf:     f64,
    /// Workers leaving unemployment this year, computed on last year's stock.
    pub reemployed:   f64,
    /// Closing unemployment stock.
    pub unemployment: f64,
    /// Closing NILF stock.
    pub nilf:         f64,
}

/// Callback invoked by [`simulate_with`][crate::simulate_with] once per year,
/// in year order.
pub trait PathObserver {
    fn on_period(&mut self, _flows: &PeriodFlows) {}
}

/// A [`PathObserver`] that does nothing.
pub struct NoopPathObserver;

impl PathObserver for NoopPathObserver {}

/// Collect every period's flows.
impl PathObserver for Vec<PeriodFlows> {
    fn on_period(&mut self, flows: &PeriodFlows) {
        self.push(*flows);
    }
}
