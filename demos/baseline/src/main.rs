//! baseline — reference run of the displacement simulator.
//!
//! High-income economy at 8% exposure.  Runs the baseline path once, then a
//! Monte Carlo over activation ~ N(0.20, 0.05) clamped to [0, 1], and writes
//! `paths.csv` / `trials.csv` to `output/baseline` for plotting, alongside
//! `run.json` recording the scenario and sampling configuration.
//!
//! Log level is read from `DISPLACE_LOG` (default `info`); set
//! `DISPLACE_LOG=dp_mc=trace` to see every trial.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dp_core::{Execution, McConfig, ParamKind, ScenarioParams};
use dp_mc::MonteCarlo;
use dp_output::{CsvWriter, McOutputObserver, OutputWriter, PathRow, report};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/baseline";

const SCENARIO: ScenarioParams = ScenarioParams {
    exposure:          0.08,
    activation:        0.20,
    unemp_ratio:       0.29, // ~29% to unemployment, ~71% NILF
    reemployment_rate: 0.15,
    horizon:           20,
};

const ACTIVATION_MU:    f64   = 0.20;
const ACTIVATION_SIGMA: f64   = 0.05;
const RUNS:             usize = 5_000;
const SEED:             u64   = 42;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DISPLACE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    println!("=== baseline — automation displacement scenario ===");
    println!(
        "Exposure: {}  |  Activation: {}  |  Unemp ratio: {}  |  Reemployment: {}  |  Years: {}",
        SCENARIO.exposure,
        SCENARIO.activation,
        SCENARIO.unemp_ratio,
        SCENARIO.reemployment_rate,
        SCENARIO.horizon,
    );
    println!();

    // 1. Baseline path.
    let paths = dp_path::simulate(&SCENARIO)?;
    println!("{}", report::format_path_table(&paths));

    // 2. Output files.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_paths(&PathRow::from_paths(&paths))?;
    let mut obs = McOutputObserver::new(writer);

    // 3. Monte Carlo on activation.
    let config = McConfig {
        param:     ParamKind::Activation,
        mu:        ACTIVATION_MU,
        sigma:     ACTIVATION_SIGMA,
        runs:      RUNS,
        seed:      SEED,
        execution: Execution::Parallel,
    };
    println!("{}", report::format_run_header(&config));

    let run = serde_json::json!({ "scenario": SCENARIO, "monte_carlo": config });
    std::fs::write(Path::new(OUTPUT_DIR).join("run.json"), serde_json::to_string_pretty(&run)?)?;

    let t0 = Instant::now();
    let outcome = MonteCarlo::new(SCENARIO, config).run_with(&mut obs)?;
    info!(
        elapsed_ms = t0.elapsed().as_millis() as u64,
        clamped_draws = outcome.clamped_draws,
        "monte carlo finished"
    );

    if let Some(e) = obs.take_error() {
        return Err(e.into());
    }

    // 4. Summary.
    println!("{}", report::format_summary(&outcome.summary));
    println!();
    println!(
        "Wrote {OUTPUT_DIR}/paths.csv ({} rows) and {OUTPUT_DIR}/trials.csv ({} rows)",
        paths.horizon(),
        outcome.terminal_values.len(),
    );

    Ok(())
}
