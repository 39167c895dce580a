//! Closed-form references.
//!
//! Analytic values used to cross-check simulated prices; the Monte Carlo
//! engine never calls into this module.

pub mod bond_option;
pub mod distributions;

pub use bond_option::{zero_bond_call, zero_bond_put};
pub use distributions::{norm_cdf, norm_pdf};
