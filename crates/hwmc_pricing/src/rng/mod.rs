//! Random number generation.

pub mod prng;

pub use prng::PathRng;
