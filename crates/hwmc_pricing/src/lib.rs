//! # hwmc_pricing
//!
//! Monte Carlo pricing engine for the one-factor Hull-White model.
//!
//! The engine consumes a [`DecisionSchedule`](hwmc_models::DecisionSchedule),
//! a [`HullWhiteParameters`](hwmc_models::HullWhiteParameters) set and a
//! [`CurveSet`](hwmc_core::CurveSet), and produces a price estimate with a
//! standard error:
//!
//! 1. covariance of the model factor across decision times, factorised by
//!    Cholesky decomposition ([`math::cholesky`])
//! 2. fixed-size path blocks simulated independently (rayon worker per
//!    block, deterministic per-block random streams)
//! 3. a pure per-block payoff reduction ([`mc::payoff`]) whose statistics
//!    the engine accumulates into the final estimate
//!
//! # Example
//!
//! ```
//! use hwmc_core::CurveSet;
//! use hwmc_models::hullwhite::HullWhiteParameters;
//! use hwmc_models::instruments::{
//!     EuropeanSwaption, FixedLeg, FloatingLeg, RateProduct, SwapDirection, VanillaSwap,
//! };
//! use hwmc_pricing::mc::{HullWhiteMonteCarloEngine, SimulationConfig};
//!
//! let params = HullWhiteParameters::constant_volatility(0.01, 0.01).unwrap();
//! let curves = CurveSet::with_flat_discount(0.02);
//!
//! let fixed = FixedLeg::new(vec![6.0, 7.0], vec![1.0, 1.0], 0.03).unwrap();
//! let floating = FloatingLeg::new(vec![5.0, 6.0], vec![6.0, 7.0]).unwrap();
//! let swap = VanillaSwap::new(100.0, fixed, floating, SwapDirection::PayFixed);
//! let product = RateProduct::EuropeanSwaption(EuropeanSwaption::new(swap, 5.0));
//!
//! let config = SimulationConfig::builder().n_paths(10_000).seed(42).build().unwrap();
//! let engine = HullWhiteMonteCarloEngine::new(config).unwrap();
//! let result = engine.price(&product, &params, &curves).unwrap();
//! assert!(result.price >= 0.0);
//! ```

pub mod math;
pub mod mc;
pub mod rng;

pub use mc::{
    EngineError, HullWhiteMonteCarloEngine, PricingResult, SimulationConfig,
    SimulationConfigBuilder,
};
