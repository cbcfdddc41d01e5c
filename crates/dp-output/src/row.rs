//! Plain data row types written by output backends.

use dp_mc::TrialRecord;
use dp_path::Paths;

/// One simulated year of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRow {
    /// 1-based year.
    pub year:         u32,
    pub unemployment: f64,
    pub nilf:         f64,
}

impl PathRow {
    /// One row per year, in year order.
    pub fn from_paths(paths: &Paths) -> Vec<PathRow> {
        paths
            .iter_years()
            .map(|(year, unemployment, nilf)| PathRow { year: year.0, unemployment, nilf })
            .collect()
    }
}

/// One Monte Carlo trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRow {
    pub trial:    u64,
    pub raw_draw: f64,
    /// Clamped value passed to the simulator.
    pub value:    f64,
    pub terminal: f64,
}

impl From<&TrialRecord> for TrialRow {
    fn from(r: &TrialRecord) -> Self {
        TrialRow {
            trial:    r.trial as u64,
            raw_draw: r.raw,
            value:    r.value,
            terminal: r.terminal,
        }
    }
}
