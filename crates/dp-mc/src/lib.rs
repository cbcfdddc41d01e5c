//! `dp-mc` — Monte Carlo driver for the displacement path simulator.
//!
//! # Run loop
//!
//! ```text
//! rng = SimRng::new(seed)
//! for trial in 0..runs:
//!   ① Draw      — x ~ Normal(mu, sigma) from the run's single stream
//!   ② Clamp     — x = clamp(x, 0, 1)
//!   ③ Simulate  — dp_path::simulate(base with param = x)
//!   ④ Record    — terminal unemployment (last element of the path)
//! summary = { mean, p5, p95 } over all recorded terminal values
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs step ③ on Rayon's thread pool.                    |
//!
//! Draws are always taken sequentially in trial order, so a parallel run
//! returns exactly the same terminal values as a sequential one.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::{McConfig, ScenarioParams};
//! use dp_mc::MonteCarlo;
//!
//! let outcome = MonteCarlo::new(ScenarioParams::baseline(), McConfig::default()).run()?;
//! println!("mean terminal unemployment: {:.3}%", 100.0 * outcome.summary.mean);
//! ```

pub mod driver;
pub mod error;
pub mod observer;
pub mod stats;


pub use driver::{McOutcome, MonteCarlo, TrialRecord, run_monte_carlo};
pub use error::{McError, McResult};
pub use observer::{NoopObserver, TrialObserver};
pub use stats::{SummaryStatistics, mean, percentile};
