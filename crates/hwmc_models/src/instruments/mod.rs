//! Interest-rate instruments.

pub mod cashflow;
pub mod product;
pub mod swap;
pub mod swaption;

pub use cashflow::{fixed_equivalent, CashflowEquivalent};
pub use product::RateProduct;
pub use swap::{FixedLeg, FloatingLeg, InstrumentError, SwapDirection, VanillaSwap};
pub use swaption::EuropeanSwaption;
