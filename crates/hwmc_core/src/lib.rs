//! # hwmc_core
//!
//! Market data layer for the Hull-White Monte Carlo pricing workspace.
//!
//! The simulation engine treats market data as an in-memory collaborator:
//! a set of named yield curves supplying discount factors. This crate owns
//! the [`YieldCurve`](market_data::curves::YieldCurve) contract, the concrete
//! curve types and the [`CurveSet`](market_data::curves::CurveSet) container
//! the pricing layer looks curves up in.
//!
//! All curve types are generic over `T: num_traits::Float` so they can be
//! instantiated with `f64` or `f32`.

pub mod market_data;

pub use market_data::curves::{CurveEnum, CurveName, CurveSet, FlatCurve, InterpolatedCurve, YieldCurve};
pub use market_data::MarketDataError;
