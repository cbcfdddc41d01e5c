//! Scenario parameters for one displacement simulation.
//!
//! # Ranges
//!
//! | Field               | Meaningful range | Validated? |
//! |---------------------|------------------|------------|
//! | `exposure`          | `[0, 1]`         | no         |
//! | `activation`        | `[0, 1]`         | no         |
//! | `unemp_ratio`       | `[0, 1]`         | no         |
//! | `reemployment_rate` | `>= 0`           | no         |
//! | `horizon`           | `>= 1`           | at use     |
//!
//! Out-of-range rates and ratios are carried through the recurrence as plain
//! arithmetic.  Callers that want bounds must check them before simulating.
//! The only rejected value is `horizon == 0`, reported as
//! [`DpError::InvalidHorizon`] by [`ScenarioParams::displaced_per_year`].

use std::fmt;
use std::str::FromStr;

use crate::{DpError, DpResult};

// ── ScenarioParams ────────────────────────────────────────────────────────────

/// The five scalar inputs of one simulation call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioParams {
    /// Share of total employment in occupations highly susceptible to automation.
    pub exposure:          f64,
    /// Share of exposed workers displaced over the whole horizon.
    pub activation:        f64,
    /// Share of displaced workers entering unemployment; the rest exit the
    /// labor force (NILF).
    pub unemp_ratio:       f64,
    /// Per-period fraction of the unemployed stock that is reemployed.
    pub reemployment_rate: f64,
    /// Number of simulated years.
    pub horizon:           u32,
}

impl ScenarioParams {
    /// High-income economy at 8% exposure, 20% activation over 20 years,
    /// weak-institution split (29% unemployed / 71% NILF), 15% annual
    /// reemployment.
    pub const BASELINE: ScenarioParams = ScenarioParams {
        exposure:          0.08,
        activation:        0.20,
        unemp_ratio:       0.29,
        reemployment_rate: 0.15,
        horizon:           20,
    };

    pub fn baseline() -> Self {
        Self::BASELINE
    }

    /// Total share of employment displaced over the horizon.
    #[inline]
    pub fn displaced_total(&self) -> f64 {
        self.exposure * self.activation
    }

    /// Displacement spread evenly across the horizon.
    pub fn displaced_per_year(&self) -> DpResult<f64> {
        if self.horizon == 0 {
            return Err(DpError::InvalidHorizon(self.horizon));
        }
        Ok(self.displaced_total() / f64::from(self.horizon))
    }

    /// Copy of `self` with `activation` replaced.
    #[inline]
    pub fn with_activation(self, activation: f64) -> Self {
        Self { activation, ..self }
    }

    /// Copy of `self` with one rate/ratio field replaced.
    pub fn with(self, param: ParamKind, value: f64) -> Self {
        match param {
            ParamKind::Exposure         => Self { exposure: value, ..self },
            ParamKind::Activation       => Self { activation: value, ..self },
            ParamKind::UnempRatio       => Self { unemp_ratio: value, ..self },
            ParamKind::ReemploymentRate => Self { reemployment_rate: value, ..self },
        }
    }

    /// Read one rate/ratio field.
    pub fn get(&self, param: ParamKind) -> f64 {
        match param {
            ParamKind::Exposure         => self.exposure,
            ParamKind::Activation       => self.activation,
            ParamKind::UnempRatio       => self.unemp_ratio,
            ParamKind::ReemploymentRate => self.reemployment_rate,
        }
    }
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self::BASELINE
    }
}

// ── ParamKind ─────────────────────────────────────────────────────────────────

/// Selects which scalar of [`ScenarioParams`] a Monte Carlo run randomizes.
///
/// Exactly one parameter varies per run; `horizon` is never sampled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamKind {
    Exposure,
    #[default]
    Activation,
    UnempRatio,
    ReemploymentRate,
}

impl ParamKind {
    pub const ALL: [ParamKind; 4] = [
        ParamKind::Exposure,
        ParamKind::Activation,
        ParamKind::UnempRatio,
        ParamKind::ReemploymentRate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Exposure         => "exposure",
            ParamKind::Activation       => "activation",
            ParamKind::UnempRatio       => "unemp_ratio",
            ParamKind::ReemploymentRate => "reemployment_rate",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKind {
    type Err = DpError;

    fn from_str(s: &str) -> DpResult<Self> {
        ParamKind::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DpError::Config(format!("unknown scenario parameter {s:?}")))
    }
}
