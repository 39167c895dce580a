//! Error types for the simulation engine.

use hwmc_core::MarketDataError;
use hwmc_models::ScheduleError;
use thiserror::Error;

use crate::math::CholeskyError;

/// Configuration errors, raised when a [`SimulationConfig`] is built with
/// invalid parameters.
///
/// [`SimulationConfig`]: super::SimulationConfig
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside `[1, MAX_PATHS]`.
    #[error("invalid path count {0}")]
    InvalidPathCount(usize),

    /// Block size must be at least 1.
    #[error("invalid block size {0}")]
    InvalidBlockSize(usize),

    /// A required builder parameter was not supplied.
    #[error("missing required parameter '{name}'")]
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },
}

/// Runtime errors of a pricing call.
///
/// All variants indicate setup defects or modelling-assumption violations;
/// none are transient and none are retried. Monte Carlo noise is not an
/// error; callers control it through the path count.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Curve lookup failure (unknown curve name, invalid maturity).
    #[error(transparent)]
    Curve(#[from] MarketDataError),

    /// Decision schedule construction failure.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Covariance factorisation failure; possible only under malformed
    /// input, since a valid ascending decision-time grid always yields a
    /// positive-definite covariance.
    #[error("covariance factorisation failed: {0}")]
    Numerical(#[from] CholeskyError),

    /// The payoff for this product variant expects a different schedule
    /// shape than the one supplied.
    #[error("swaption payoff requires exactly one decision time, schedule has {decisions}")]
    ScheduleMismatch {
        /// Number of decision times in the offending schedule.
        decisions: usize,
    },
}
