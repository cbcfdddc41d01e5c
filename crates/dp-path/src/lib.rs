//! `dp-path` — the displacement path simulator.
//!
//! # Recurrence
//!
//! ```text
//! displaced_per_year = exposure * activation / horizon
//! u, n = 0, 0
//! for year in 1..=horizon:
//!   ① Inflow     — new_u = displaced_per_year * unemp_ratio
//!                  new_n = displaced_per_year * (1 - unemp_ratio)
//!   ② Outflow    — reemployed = reemployment_rate * u   (last year's stock)
//!   ③ Update     — u = u + new_u - reemployed
//!                  n = n + new_n
//!   ④ Record     — push u, n
//! ```
//!
//! Reemployment is always computed from the stock *before* this year's
//! inflow.  Reordering steps ② and ③ changes every value after year 1.
//!
//! Stocks are not clamped: a reemployment rate above 1 can drive the
//! unemployment stock negative, and that is reported as-is.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::ScenarioParams;
//!
//! let paths = dp_path::simulate(&ScenarioParams::baseline())?;
//! println!("terminal unemployment: {:.3}%", 100.0 * paths.terminal_unemployment());
//! ```

pub mod observer;
pub mod paths;
pub mod simulate;

#[cfg(test)]
mod tests;

pub use observer::{NoopPathObserver, PathObserver, PeriodFlows};
pub use paths::Paths;
pub use simulate::{simulate, simulate_with};
