//! Numerical routines.

pub mod cholesky;

pub use cholesky::{cholesky, CholeskyError};
