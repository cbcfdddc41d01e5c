//! The Monte Carlo driver.

use dp_core::{Execution, McConfig, ParamKind, ScenarioParams, SimRng};
use rand_distr::Normal;
use tracing::{debug, trace};

use crate::{McError, McResult, NoopObserver, SummaryStatistics, TrialObserver};

// ── TrialRecord ───────────────────────────────────────────────────────────────

/// One trial: the sampled parameter and the resulting terminal unemployment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrialRecord {
    /// 0-based trial index, equal to the draw's position in the RNG stream.
    pub trial:    usize,
    /// The raw normal draw, before clamping.
    pub raw:      f64,
    /// The value fed to the simulator, clamped to `[0, 1]`.
    pub value:    f64,
    /// Last element of the simulated unemployment path.
    pub terminal: f64,
}

impl TrialRecord {
    #[inline]
    pub fn was_clamped(&self) -> bool {
        self.raw != self.value
    }
}

// ── McOutcome ─────────────────────────────────────────────────────────────────

/// Result of a full Monte Carlo run.
#[derive(Clone, Debug, PartialEq)]
pub struct McOutcome {
    /// Terminal unemployment of every trial, in trial order.
    pub terminal_values: Vec<f64>,
    pub summary:         SummaryStatistics,
    /// Number of draws that fell outside `[0, 1]` and were clamped.
    pub clamped_draws:   usize,
}

// ── MonteCarlo ────────────────────────────────────────────────────────────────

/// Repeatedly simulates `base` with one parameter drawn from a clamped normal
/// distribution.
///
/// Each call to [`run`][Self::run] creates its own [`SimRng`] from
/// `config.seed`, so repeated runs of the same driver are identical and runs
/// of different drivers never interact.
#[derive(Clone, Debug)]
pub struct MonteCarlo {
    pub base:   ScenarioParams,
    pub config: McConfig,
}

impl MonteCarlo {
    pub fn new(base: ScenarioParams, config: McConfig) -> Self {
        Self { base, config }
    }

    pub fn run(&self) -> McResult<McOutcome> {
        self.run_with(&mut NoopObserver)
    }

    /// Run all trials, reporting each to `observer` in trial order.
    ///
    /// # Errors
    ///
    /// - [`McError::InvalidTrialCount`] if `config.runs == 0`.
    /// - [`McError::Core`] if `base.horizon == 0`.
    /// - [`McError::InvalidDistribution`] if `mu` is not finite, or `sigma`
    ///   is negative or not finite.
    ///
    /// All three are checked before the first draw.
    pub fn run_with<O: TrialObserver>(&self, observer: &mut O) -> McResult<McOutcome> {
        let cfg = &self.config;
        if cfg.runs == 0 {
            return Err(McError::InvalidTrialCount(cfg.runs));
        }
        self.base.displaced_per_year()?;
        // `Normal::new` accepts a negative std dev (mirrored) and a NaN mean.
        if !cfg.mu.is_finite() || !cfg.sigma.is_finite() || cfg.sigma < 0.0 {
            return Err(McError::InvalidDistribution { mu: cfg.mu, sigma: cfg.sigma });
        }
        let normal = Normal::new(cfg.mu, cfg.sigma).map_err(|source| McError::Distribution {
            mu: cfg.mu,
            sigma: cfg.sigma,
            source,
        })?;

        debug!(
            param = %cfg.param,
            mu = cfg.mu,
            sigma = cfg.sigma,
            runs = cfg.runs,
            seed = cfg.seed,
            execution = ?cfg.execution,
            "monte carlo run starting"
        );

        // ── Draw phase (always sequential) ────────────────────────────────
        let mut rng = SimRng::new(cfg.seed);
        let draws: Vec<f64> = (0..cfg.runs).map(|_| rng.sample(&normal)).collect();

        // ── Evaluate phase ────────────────────────────────────────────────
        let terminal_values = self.evaluate(&draws)?;

        // ── Report phase (trial order) ────────────────────────────────────
        let mut clamped_draws = 0;
        for (trial, (&raw, &terminal)) in draws.iter().zip(&terminal_values).enumerate() {
            let record = TrialRecord { trial, raw, value: clamp_unit(raw), terminal };
            if record.was_clamped() {
                clamped_draws += 1;
            }
            trace!(trial, raw, value = record.value, terminal, "trial");
            observer.on_trial(&record);
        }

        let summary = SummaryStatistics::from_values(&terminal_values)?;
        observer.on_run_end(&summary);

        debug!(
            mean = summary.mean,
            p5 = summary.p5,
            p95 = summary.p95,
            clamped_draws,
            "monte carlo run complete"
        );

        Ok(McOutcome { terminal_values, summary, clamped_draws })
    }

    /// Simulate every draw and return the terminal unemployment values in
    /// draw order.
    fn evaluate(&self, raw: &[f64]) -> McResult<Vec<f64>> {
        match self.config.execution {
            Execution::Sequential => self.evaluate_sequential(raw),
            Execution::Parallel   => self.evaluate_parallel(raw),
        }
    }

    fn evaluate_sequential(&self, raw: &[f64]) -> McResult<Vec<f64>> {
        raw.iter().map(|&x| self.trial(x)).collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(&self, raw: &[f64]) -> McResult<Vec<f64>> {
        use rayon::prelude::*;
        // Indexed collect preserves draw order.
        raw.par_iter().map(|&x| self.trial(x)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel(&self, raw: &[f64]) -> McResult<Vec<f64>> {
        tracing::warn!("parallel execution requested but dp-mc was built without the `parallel` feature; running sequentially");
        self.evaluate_sequential(raw)
    }

    #[inline]
    fn trial(&self, raw: f64) -> McResult<f64> {
        let params = self.base.with(self.config.param, clamp_unit(raw));
        Ok(dp_path::simulate(&params)?.terminal_unemployment())
    }
}

#[inline]
fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// ── Free-function entry point ─────────────────────────────────────────────────

/// Run a sequential Monte Carlo over `varying_param` with the given sampling
/// parameters.
///
/// Equivalent to `MonteCarlo::new(base, config).run()` with a config built
/// from the arguments.
pub fn run_monte_carlo(
    base:          ScenarioParams,
    varying_param: ParamKind,
    mu:            f64,
    sigma:         f64,
    runs:          usize,
    seed:          u64,
) -> McResult<McOutcome> {
    let config = McConfig {
        param: varying_param,
        mu,
        sigma,
        runs,
        seed,
        execution: Execution::Sequential,
    };
    MonteCarlo::new(base, config).run()
}
