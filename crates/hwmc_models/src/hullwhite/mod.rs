//! Hull-White one-factor short-rate model.
//!
//! The short rate follows
//! ```text
//! dr(t) = [theta(t) - a * r(t)] * dt + sigma(t) * dW(t)
//! ```
//! with scalar mean reversion `a` and piecewise-constant volatility
//! `sigma(t)`. The simulation engine never discretises this SDE directly;
//! it relies on the analytic moments in [`analytics`], which is what makes
//! the path update exact rather than an Euler approximation.

pub mod analytics;
pub mod parameters;

pub use parameters::{HullWhiteParameters, ModelError, TIME_INFINITY};
