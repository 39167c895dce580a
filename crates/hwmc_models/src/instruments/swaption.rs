//! European swaption on a vanilla swap.

use super::VanillaSwap;

/// Physically settled European swaption.
///
/// The holder may enter the underlying swap at expiry. The decision
/// schedule builder turns the underlying into its cash-flow equivalent, so
/// the simulation engine only ever sees a single decision time with a set
/// of deterministic impact amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanSwaption {
    underlying: VanillaSwap,
    /// Time to expiry in year fractions.
    expiry: f64,
}

impl EuropeanSwaption {
    /// Construct a swaption from its underlying swap and expiry.
    pub fn new(underlying: VanillaSwap, expiry: f64) -> Self {
        Self { underlying, expiry }
    }

    /// The swap entered on exercise.
    #[inline]
    pub fn underlying(&self) -> &VanillaSwap {
        &self.underlying
    }

    /// Time to expiry.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }
}
