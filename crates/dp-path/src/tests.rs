//! Tests for the path simulator.

use dp_core::{DpError, ScenarioParams, Year};

use crate::{PeriodFlows, simulate, simulate_with};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TOL: f64 = 1e-12;

fn params(
    exposure:          f64,
    activation:        f64,
    unemp_ratio:       f64,
    reemployment_rate: f64,
    horizon:           u32,
) -> ScenarioParams {
    ScenarioParams { exposure, activation, unemp_ratio, reemployment_rate, horizon }
}

fn assert_close(got: f64, want: f64, what: &str) {
    assert!((got - want).abs() < TOL, "{what}: got {got}, want {want}");
}

// ── Shape ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod shape_tests {
    use super::*;

    #[test]
    fn lengths_equal_horizon() {
        for horizon in [1, 2, 20, 150] {
            let paths = simulate(&params(0.08, 0.2, 0.29, 0.15, horizon)).unwrap();
            assert_eq!(paths.unemployment().len(), horizon as usize);
            assert_eq!(paths.nilf().len(), horizon as usize);
            assert_eq!(paths.horizon(), horizon as usize);
        }
    }

    #[test]
    fn zero_horizon_is_an_error() {
        let result = simulate(&params(0.08, 0.2, 0.29, 0.15, 0));
        assert_eq!(result, Err(DpError::InvalidHorizon(0)));
    }

    #[test]
    fn iter_years_is_one_based() {
        let paths = simulate(&ScenarioParams::baseline()).unwrap();
        let rows: Vec<_> = paths.iter_years().collect();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].0, Year(1));
        assert_eq!(rows[19].0, Year(20));
        assert_eq!(rows[4].1, paths.unemployment()[4]);
        assert_eq!(rows[4].2, paths.nilf()[4]);
    }

    #[test]
    fn terminal_values_are_last_elements() {
        let paths = simulate(&ScenarioParams::baseline()).unwrap();
        assert_eq!(paths.terminal_unemployment(), paths.unemployment()[19]);
        assert_eq!(paths.terminal_nilf(), paths.nilf()[19]);
        let (u, n) = paths.clone().into_parts();
        assert_eq!(u, paths.unemployment());
        assert_eq!(n, paths.nilf());
    }
}

// ── Recurrence properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod recurrence_tests {
    use super::*;

    #[test]
    fn zero_displacement_gives_all_zero_paths() {
        for (exposure, activation) in [(0.0, 0.2), (0.08, 0.0), (0.0, 0.0)] {
            for (ratio, rate) in [(0.29, 0.15), (1.0, 0.0), (0.0, 1.0), (1.7, 3.0)] {
                let paths = simulate(&params(exposure, activation, ratio, rate, 12)).unwrap();
                assert_eq!(paths.unemployment().len(), 12);
                assert!(paths.unemployment().iter().all(|&v| v == 0.0));
                assert!(paths.nilf().iter().all(|&v| v == 0.0));
            }
        }
    }

    #[test]
    fn zero_reemployment_accumulates_linearly() {
        let p = params(0.08, 0.2, 0.29, 0.0, 20);
        let per_year = p.displaced_per_year().unwrap();
        let paths = simulate(&p).unwrap();
        for (year, u, _) in paths.iter_years() {
            assert_close(u, per_year * 0.29 * f64::from(year.0), "unemployment");
        }
    }

    #[test]
    fn full_reemployment_holds_steady_state() {
        let p = params(0.08, 0.2, 0.29, 1.0, 20);
        let inflow = p.displaced_per_year().unwrap() * 0.29;
        let paths = simulate(&p).unwrap();
        for &u in paths.unemployment() {
            assert_close(u, inflow, "steady-state unemployment");
        }
    }

    #[test]
    fn nilf_is_linear_and_monotone() {
        let p = params(0.08, 0.2, 0.29, 0.15, 20);
        let per_year = p.displaced_per_year().unwrap();
        let paths = simulate(&p).unwrap();
        for (year, _, n) in paths.iter_years() {
            assert_close(n, per_year * 0.71 * f64::from(year.0), "nilf");
        }
        assert!(paths.nilf().windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn nilf_ignores_reemployment_rate() {
        let a = simulate(&params(0.08, 0.2, 0.29, 0.0, 20)).unwrap();
        let b = simulate(&params(0.08, 0.2, 0.29, 0.9, 20)).unwrap();
        assert_eq!(a.nilf(), b.nilf());
    }

    #[test]
    fn baseline_first_period_literal() {
        let paths = simulate(&ScenarioParams::baseline()).unwrap();
        assert_close(paths.unemployment()[0], 0.08 * 0.20 / 20.0 * 0.29, "unemployment[0]");
        assert_close(paths.unemployment()[0], 0.0000232, "unemployment[0] literal");
        assert_close(paths.nilf()[0], 0.08 * 0.20 / 20.0 * 0.71, "nilf[0]");
        assert_close(paths.nilf()[0], 0.0000568, "nilf[0] literal");
    }

    #[test]
    fn reemployment_uses_previous_stock() {
        // Year 2 = inflow + (1 - rate) * year-1 stock.  Applying the rate to
        // the post-inflow stock would give (1 - rate) * (u1 + inflow) instead.
        let p = params(0.1, 0.5, 0.5, 0.25, 5);
        let inflow = p.displaced_per_year().unwrap() * 0.5;
        let paths = simulate(&p).unwrap();
        let u1 = paths.unemployment()[0];
        assert_close(u1, inflow, "year 1");
        assert_close(paths.unemployment()[1], u1 + inflow - 0.25 * u1, "year 2");
    }

    #[test]
    fn matches_closed_form() {
        // u_t = inflow * (1 - (1 - r)^t) / r
        let p = ScenarioParams::baseline();
        let inflow = p.displaced_per_year().unwrap() * p.unemp_ratio;
        let r = p.reemployment_rate;
        let paths = simulate(&p).unwrap();
        for (year, u, _) in paths.iter_years() {
            let t = f64::from(year.0);
            assert_close(u, inflow * (1.0 - (1.0 - r).powf(t)) / r, "closed form");
        }
    }
}

// ── Permissiveness ────────────────────────────────────────────────────────────

#[cfg(test)]
mod permissive_tests {
    use super::*;

    #[test]
    fn out_of_range_inputs_are_computed_through() {
        let cases = [
            params(0.08, -0.2, 0.29, 0.15, 10),
            params(1.5, 0.2, 0.29, 0.15, 10),
            params(0.08, 0.2, 1.4, 0.15, 10),
            params(0.08, 0.2, -0.3, 0.15, 10),
            params(0.08, 0.2, 0.29, -0.5, 10),
            params(0.08, 0.2, 0.29, 2.5, 10),
        ];
        for p in cases {
            let paths = simulate(&p).unwrap();
            assert_eq!(paths.horizon(), 10);
            assert!(paths.unemployment().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn negative_activation_propagates_sign() {
        let paths = simulate(&params(0.08, -0.2, 0.29, 0.15, 10)).unwrap();
        assert!(paths.unemployment()[0] < 0.0);
        assert!(paths.nilf()[0] < 0.0);
    }

    #[test]
    fn extreme_reemployment_goes_negative_unclamped() {
        // rate 2.5: u2 = inflow + u1 - 2.5 * u1 = inflow - 1.5 * inflow < 0
        let p = params(0.08, 0.2, 0.29, 2.5, 4);
        let inflow = p.displaced_per_year().unwrap() * 0.29;
        let paths = simulate(&p).unwrap();
        assert_close(paths.unemployment()[1], -0.5 * inflow, "year 2");
        assert!(paths.unemployment()[1] < 0.0);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn observer_sees_every_year_in_order() {
        let p = ScenarioParams::baseline();
        let mut flows: Vec<PeriodFlows> = Vec::new();
        let paths = simulate_with(&p, &mut flows).unwrap();

        assert_eq!(flows.len(), 20);
        for (i, f) in flows.iter().enumerate() {
            assert_eq!(f.year, Year::from_index(i));
            assert_eq!(f.unemployment, paths.unemployment()[i]);
            assert_eq!(f.nilf, paths.nilf()[i]);
        }
        assert_eq!(flows[0].reemployed, 0.0);
        assert_close(flows[1].reemployed, 0.15 * flows[0].unemployment, "year 2 reemployed");
    }

    #[test]
    fn observer_does_not_change_result() {
        let p = ScenarioParams::baseline();
        let mut flows: Vec<PeriodFlows> = Vec::new();
        assert_eq!(simulate_with(&p, &mut flows).unwrap(), simulate(&p).unwrap());
    }

    #[test]
    fn observer_not_called_on_error() {
        let p = ScenarioParams { horizon: 0, ..ScenarioParams::baseline() };
        let mut flows: Vec<PeriodFlows> = Vec::new();
        assert!(simulate_with(&p, &mut flows).is_err());
        assert!(flows.is_empty());
    }
}
