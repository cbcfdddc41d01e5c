//! The displacement / reemployment recurrence.

use dp_core::{DpResult, ScenarioParams, Year};

use crate::{NoopPathObserver, PathObserver, Paths, PeriodFlows};

/// Simulate unemployment and NILF paths for `params`.
///
/// Rates and ratios are not validated.  Fails only with
/// [`DpError::InvalidHorizon`][dp_core::DpError::InvalidHorizon] when
/// `params.horizon == 0`.
pub fn simulate(params: &ScenarioParams) -> DpResult<Paths> {
    simulate_with(params, &mut NoopPathObserver)
}

/// Like [`simulate`], reporting each year's flows to `observer`.
pub fn simulate_with<O: PathObserver>(
    params:   &ScenarioParams,
    observer: &mut O,
) -> DpResult<Paths> {
    let per_year = params.displaced_per_year()?;

    // Constant across periods.
    let new_unemp = per_year * params.unemp_ratio;
    let new_nilf = per_year * (1.0 - params.unemp_ratio);

    let mut paths = Paths::with_capacity(params.horizon as usize);
    let mut unemp = 0.0;
    let mut nilf = 0.0;

    for year in Year::range(params.horizon) {
        let reemployed = params.reemployment_rate * unemp;

        unemp = unemp + new_unemp - reemployed;
        nilf += new_nilf;

        paths.push(unemp, nilf);
        observer.on_period(&PeriodFlows {
            year,
            new_unemp,
            new_nilf,
            reemployed,
            unemployment: unemp,
            nilf,
        });
    }

    Ok(paths)
}
