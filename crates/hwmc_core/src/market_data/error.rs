//! Market data error types.

use thiserror::Error;

/// Errors raised by curve construction and lookups.
///
/// None of these are transient: each indicates a setup defect, so callers
/// surface them unmodified rather than retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Negative time to maturity in a discount factor query.
    #[error("invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The offending maturity.
        t: f64,
    },

    /// A curve referenced by name is absent from the curve set.
    #[error("curve not found: {name}")]
    CurveNotFound {
        /// Name of the missing curve.
        name: String,
    },

    /// Too few pillars to build an interpolated curve.
    #[error("interpolated curve needs at least 2 pillars, got {count}")]
    InsufficientPillars {
        /// Number of pillars supplied.
        count: usize,
    },

    /// Pillar times must be strictly increasing and non-negative.
    #[error("pillar times must be strictly increasing and non-negative (index {index})")]
    NonMonotonicPillars {
        /// Index of the first offending pillar.
        index: usize,
    },

    /// A supplied discount factor was not strictly positive.
    #[error("discount factors must be strictly positive, got {df} at index {index}")]
    InvalidDiscountFactor {
        /// The offending discount factor.
        df: f64,
        /// Its pillar index.
        index: usize,
    },
}
