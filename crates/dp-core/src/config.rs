//! Monte Carlo run configuration.

use crate::ParamKind;

/// How trials are evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Execution {
    /// Draw and simulate one trial at a time.
    #[default]
    Sequential,
    /// Draw all trials sequentially, then simulate them on Rayon's pool.
    ///
    /// Only honoured when `dp-mc` is built with the `parallel` feature;
    /// otherwise it falls back to sequential evaluation.  Either way the
    /// result is identical for a fixed seed.
    Parallel,
}

/// Global configuration for one Monte Carlo run.
///
/// The scenario being perturbed is passed separately as a
/// [`ScenarioParams`][crate::ScenarioParams]; this struct only describes the
/// sampling.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McConfig {
    /// The single parameter drawn per trial.
    pub param:     ParamKind,
    /// Mean of the normal distribution the parameter is drawn from.
    pub mu:        f64,
    /// Standard deviation of that distribution.
    pub sigma:     f64,
    /// Number of trials.  Must be positive.
    pub runs:      usize,
    /// Seed of the run's single RNG stream.
    pub seed:      u64,
    pub execution: Execution,
}

impl McConfig {
    pub const DEFAULT_MU:    f64   = 0.20;
    pub const DEFAULT_SIGMA: f64   = 0.05;
    pub const DEFAULT_RUNS:  usize = 5_000;
    pub const DEFAULT_SEED:  u64   = 42;
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            param:     ParamKind::Activation,
            mu:        Self::DEFAULT_MU,
            sigma:     Self::DEFAULT_SIGMA,
            runs:      Self::DEFAULT_RUNS,
            seed:      Self::DEFAULT_SEED,
            execution: Execution::Sequential,
        }
    }
}
