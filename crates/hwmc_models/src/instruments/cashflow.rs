//! Cash-flow-equivalent representation of a swap.

use hwmc_core::market_data::curves::{CurveSet, YieldCurve};
use hwmc_core::MarketDataError;

use super::{SwapDirection, VanillaSwap};

/// Deterministic payment schedule equivalent to a swap.
///
/// Floating payments are replaced by their forward-implied fixed amounts,
/// so the whole swap becomes a set of known payments at known times. Signs
/// are from the holder's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowEquivalent {
    times: Vec<f64>,
    amounts: Vec<f64>,
}

impl CashflowEquivalent {
    /// Payment times, parallel to [`amounts`](Self::amounts).
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Signed payment amounts.
    #[inline]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Consume into the parallel `(times, amounts)` pair.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.amounts)
    }
}

/// Convert a swap to its cash-flow equivalent.
///
/// - Fixed coupons are taken as-is: `sign * N * rate * accrual` at each
///   payment time.
/// - Each floating payment is replaced by its forward-implied fixed amount
///   `sign * N * (P(0, T_start) / P(0, T_end) - 1)` at the period end,
///   read off the projection curve.
///
/// A `PayFixed` holder pays the fixed leg (negative) and receives the
/// floating leg (positive); `ReceiveFixed` flips both signs.
///
/// # Errors
///
/// Curve lookups propagate `MarketDataError` (missing projection curve,
/// negative times).
pub fn fixed_equivalent(
    swap: &VanillaSwap,
    curves: &CurveSet<f64>,
) -> Result<CashflowEquivalent, MarketDataError> {
    let forward = curves.forward_curve()?;

    let (fixed_sign, float_sign) = match swap.direction() {
        SwapDirection::PayFixed => (-1.0, 1.0),
        SwapDirection::ReceiveFixed => (1.0, -1.0),
    };
    let notional = swap.notional();

    let fixed = swap.fixed_leg();
    let floating = swap.floating_leg();
    let n_flows = fixed.payment_times().len() + floating.period_ends().len();
    let mut times = Vec::with_capacity(n_flows);
    let mut amounts = Vec::with_capacity(n_flows);

    for (&t, &accrual) in fixed
        .payment_times()
        .iter()
        .zip(fixed.accrual_fractions())
    {
        times.push(t);
        amounts.push(fixed_sign * notional * fixed.rate() * accrual);
    }

    for (&start, &end) in floating
        .period_starts()
        .iter()
        .zip(floating.period_ends())
    {
        let df_start = forward.discount_factor(start)?;
        let df_end = forward.discount_factor(end)?;
        times.push(end);
        amounts.push(float_sign * notional * (df_start / df_end - 1.0));
    }

    Ok(CashflowEquivalent { times, amounts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{FixedLeg, FloatingLeg};
    use approx::assert_relative_eq;

    fn sample_swap(direction: SwapDirection) -> VanillaSwap {
        let fixed = FixedLeg::new(vec![6.0, 7.0], vec![1.0, 1.0], 0.03).unwrap();
        let floating = FloatingLeg::new(vec![5.0, 6.0], vec![6.0, 7.0]).unwrap();
        VanillaSwap::new(100.0, fixed, floating, direction)
    }

    #[test]
    fn test_payer_swap_flat_curve() {
        let curves = CurveSet::with_flat_discount(0.02_f64);
        let eq = fixed_equivalent(&sample_swap(SwapDirection::PayFixed), &curves).unwrap();

        assert_eq!(eq.times(), &[6.0, 7.0, 6.0, 7.0]);

        // Fixed coupons paid: -100 * 0.03 * 1.0
        assert_relative_eq!(eq.amounts()[0], -3.0, max_relative = 1e-12);
        assert_relative_eq!(eq.amounts()[1], -3.0, max_relative = 1e-12);

        // Floating received: 100 * (P(start)/P(end) - 1) = 100 * (e^{0.02} - 1)
        let expected = 100.0 * (0.02_f64.exp() - 1.0);
        assert_relative_eq!(eq.amounts()[2], expected, max_relative = 1e-12);
        assert_relative_eq!(eq.amounts()[3], expected, max_relative = 1e-12);
    }

    #[test]
    fn test_receiver_swap_flips_signs() {
        let curves = CurveSet::with_flat_discount(0.02_f64);
        let payer = fixed_equivalent(&sample_swap(SwapDirection::PayFixed), &curves).unwrap();
        let receiver =
            fixed_equivalent(&sample_swap(SwapDirection::ReceiveFixed), &curves).unwrap();
        for (p, r) in payer.amounts().iter().zip(receiver.amounts()) {
            assert_relative_eq!(*p, -r, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_missing_curve_propagates() {
        let curves: CurveSet<f64> = CurveSet::new();
        let result = fixed_equivalent(&sample_swap(SwapDirection::PayFixed), &curves);
        assert!(matches!(
            result,
            Err(MarketDataError::CurveNotFound { .. })
        ));
    }

    #[test]
    fn test_par_swap_has_near_zero_value() {
        // A swap whose fixed rate equals the flat-curve par rate nets to
        // zero present value when its equivalent flows are discounted.
        let rate: f64 = 0.02;
        let curves = CurveSet::with_flat_discount(rate);
        let accrual_rate = rate.exp() - 1.0; // one-period forward over [t, t+1]
        let fixed = FixedLeg::new(vec![6.0, 7.0], vec![1.0, 1.0], accrual_rate).unwrap();
        let floating = FloatingLeg::new(vec![5.0, 6.0], vec![6.0, 7.0]).unwrap();
        let swap = VanillaSwap::new(100.0, fixed, floating, SwapDirection::PayFixed);

        let eq = fixed_equivalent(&swap, &curves).unwrap();
        let discount = curves.discount_curve().unwrap();
        let pv: f64 = eq
            .times()
            .iter()
            .zip(eq.amounts())
            .map(|(&t, &a)| a * discount.discount_factor(t).unwrap())
            .sum();
        assert!(pv.abs() < 1e-10);
    }
}
