//! Core error type.
//!
//! Downstream crates define their own error enums and wrap `DpError` as one
//! variant via `From`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DpError {
    /// `horizon` must be at least one year; zero would divide by zero when
    /// spreading displacement across periods.
    #[error("invalid horizon {0}: must be at least 1 year")]
    InvalidHorizon(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dp-core` and the simulator.
pub type DpResult<T> = Result<T, DpError>;
