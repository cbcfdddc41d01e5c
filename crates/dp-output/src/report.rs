//! Plain-text rendering of paths and Monte Carlo summaries.
//!
//! All values are shares of total employment and are shown as percentages.

use std::fmt::Write as _;

use dp_core::McConfig;
use dp_mc::SummaryStatistics;
use dp_path::Paths;

/// Format a share as a percentage with three decimals (`0.00123` → `"0.123%"`).
pub fn percent(share: f64) -> String {
    format!("{:.3}%", 100.0 * share)
}

/// One line describing what a Monte Carlo run sampled.
pub fn format_run_header(config: &McConfig) -> String {
    format!(
        "Monte Carlo: {} ~ N({}, {}) clamped to [0, 1], {} runs, seed {}",
        config.param, config.mu, config.sigma, config.runs, config.seed,
    )
}

/// The terminal-unemployment summary block.
pub fn format_summary(summary: &SummaryStatistics) -> String {
    let mut out = String::from("Terminal unemployment (as share of labor force):\n");
    let _ = writeln!(out, "  Mean:            {}", percent(summary.mean));
    let _ = writeln!(out, "  5th percentile:  {}", percent(summary.p5));
    let _ = write!(out, "  95th percentile: {}", percent(summary.p95));
    out
}

/// Year-by-year table of both paths.
pub fn format_path_table(paths: &Paths) -> String {
    let mut out = format!("{:<6} {:>14} {:>14}\n", "Year", "Unemployment", "NILF");
    let _ = writeln!(out, "{}", "-".repeat(36));
    for (year, u, n) in paths.iter_years() {
        let _ = writeln!(out, "{:<6} {:>14} {:>14}", year.0, percent(u), percent(n));
    }
    out
}
