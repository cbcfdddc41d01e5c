use dp_core::DpError;
use rand_distr::NormalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McError {
    #[error("invalid trial count {0}: at least one trial is required")]
    InvalidTrialCount(usize),

    /// `mu` must be finite and `sigma` finite and non-negative.
    #[error("invalid sampling distribution Normal(mu={mu}, sigma={sigma})")]
    InvalidDistribution { mu: f64, sigma: f64 },

    #[error("cannot sample from Normal(mu={mu}, sigma={sigma}): {source}")]
    Distribution {
        mu:     f64,
        sigma:  f64,
        source: NormalError,
    },

    #[error(transparent)]
    Core(#[from] DpError),
}

pub type McResult<T> = Result<T, McError>;
