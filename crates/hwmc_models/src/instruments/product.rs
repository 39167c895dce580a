//! Closed sum type of priceable rate products.

use super::{EuropeanSwaption, VanillaSwap};

/// Product variants the Monte Carlo engine can price.
///
/// This enum is matched exhaustively in exactly two places: the decision
/// schedule builder ([`DecisionSchedule::from_product`]) and the payoff
/// aggregator. Adding a variant therefore forces both sites to be updated
/// at compile time; there is no runtime "unsupported instrument" fallthrough.
///
/// [`DecisionSchedule::from_product`]: crate::schedule::DecisionSchedule::from_product
#[derive(Debug, Clone, PartialEq)]
pub enum RateProduct {
    /// Physically settled European swaption: optionality at a single
    /// decision time, payoff `max(value of cash-flow equivalent, 0)`.
    EuropeanSwaption(EuropeanSwaption),
    /// Forward-starting swap valued off its cash-flow equivalent with no
    /// optionality; the degenerate variant that reprices the input curve.
    ForwardSwap(VanillaSwap),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{FixedLeg, FloatingLeg, SwapDirection};

    #[test]
    fn test_variants_carry_their_instruments() {
        let fixed = FixedLeg::new(vec![2.0], vec![1.0], 0.03).unwrap();
        let floating = FloatingLeg::new(vec![1.0], vec![2.0]).unwrap();
        let swap = VanillaSwap::new(50.0, fixed, floating, SwapDirection::PayFixed);

        let forward = RateProduct::ForwardSwap(swap.clone());
        let option = RateProduct::EuropeanSwaption(EuropeanSwaption::new(swap, 1.0));

        assert!(matches!(forward, RateProduct::ForwardSwap(_)));
        assert!(matches!(option, RateProduct::EuropeanSwaption(_)));
    }
}
