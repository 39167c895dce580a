//! # hwmc_models
//!
//! Model layer for the Hull-White Monte Carlo pricing workspace.
//!
//! Contains everything the simulation engine needs to know about *what* is
//! being priced, without any knowledge of *how* paths are generated:
//!
//! - [`hullwhite`]: the immutable piecewise-constant parameter set and the
//!   pure analytic functions of it (accumulated factor variance, `beta`,
//!   volatility-to-maturity loadings)
//! - [`instruments`]: vanilla swaps, European swaptions and the closed
//!   [`RateProduct`](instruments::RateProduct) sum type the pricing layer
//!   dispatches on
//! - [`schedule`]: the generic decision/impact schedule and its builder,
//!   which decouples instrument semantics from the simulator
//! - [`analytical`]: closed-form references (normal distribution, zero-bond
//!   options) used to cross-check simulated prices

pub mod analytical;
pub mod hullwhite;
pub mod instruments;
pub mod schedule;

pub use hullwhite::{HullWhiteParameters, ModelError};
pub use instruments::{EuropeanSwaption, RateProduct, SwapDirection, VanillaSwap};
pub use schedule::{DecisionSchedule, ScheduleError};
