//! Vanilla fixed-for-floating interest rate swap.

use std::fmt;
use thiserror::Error;

/// Errors raised by instrument construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Parallel leg arrays differ in length.
    #[error("leg arrays must have equal length: {times} payment times vs {fractions} accrual fractions")]
    LegLengthMismatch {
        /// Number of payment (or period) times.
        times: usize,
        /// Number of accrual fractions (or period ends).
        fractions: usize,
    },

    /// A leg must carry at least one period.
    #[error("leg must have at least one period")]
    EmptyLeg,
}

/// Which leg the holder pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Pay fixed, receive floating (payer swap).
    PayFixed,
    /// Receive fixed, pay floating (receiver swap).
    ReceiveFixed,
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::PayFixed => write!(f, "PayFixed"),
            SwapDirection::ReceiveFixed => write!(f, "ReceiveFixed"),
        }
    }
}

/// Fixed leg: deterministic coupons at known payment times.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLeg {
    /// Payment times in year fractions.
    payment_times: Vec<f64>,
    /// Accrual fraction per coupon, parallel to `payment_times`.
    accrual_fractions: Vec<f64>,
    /// Fixed rate.
    rate: f64,
}

impl FixedLeg {
    /// Construct a fixed leg.
    ///
    /// # Errors
    ///
    /// `InstrumentError` if the arrays are empty or differ in length.
    pub fn new(
        payment_times: Vec<f64>,
        accrual_fractions: Vec<f64>,
        rate: f64,
    ) -> Result<Self, InstrumentError> {
        if payment_times.is_empty() {
            return Err(InstrumentError::EmptyLeg);
        }
        if payment_times.len() != accrual_fractions.len() {
            return Err(InstrumentError::LegLengthMismatch {
                times: payment_times.len(),
                fractions: accrual_fractions.len(),
            });
        }
        Ok(Self {
            payment_times,
            accrual_fractions,
            rate,
        })
    }

    /// Payment times.
    #[inline]
    pub fn payment_times(&self) -> &[f64] {
        &self.payment_times
    }

    /// Accrual fractions.
    #[inline]
    pub fn accrual_fractions(&self) -> &[f64] {
        &self.accrual_fractions
    }

    /// Fixed rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Floating leg: one fixing period per payment, paid at the period end.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLeg {
    /// Period start (fixing) times.
    period_starts: Vec<f64>,
    /// Period end (payment) times, parallel to `period_starts`.
    period_ends: Vec<f64>,
}

impl FloatingLeg {
    /// Construct a floating leg.
    ///
    /// # Errors
    ///
    /// `InstrumentError` if the arrays are empty or differ in length.
    pub fn new(period_starts: Vec<f64>, period_ends: Vec<f64>) -> Result<Self, InstrumentError> {
        if period_starts.is_empty() {
            return Err(InstrumentError::EmptyLeg);
        }
        if period_starts.len() != period_ends.len() {
            return Err(InstrumentError::LegLengthMismatch {
                times: period_starts.len(),
                fractions: period_ends.len(),
            });
        }
        Ok(Self {
            period_starts,
            period_ends,
        })
    }

    /// Period start times.
    #[inline]
    pub fn period_starts(&self) -> &[f64] {
        &self.period_starts
    }

    /// Period end times.
    #[inline]
    pub fn period_ends(&self) -> &[f64] {
        &self.period_ends
    }
}

/// Vanilla fixed-for-floating swap.
///
/// # Example
///
/// ```
/// use hwmc_models::instruments::{FixedLeg, FloatingLeg, SwapDirection, VanillaSwap};
///
/// let fixed = FixedLeg::new(vec![6.0, 7.0], vec![1.0, 1.0], 0.03).unwrap();
/// let floating = FloatingLeg::new(vec![5.0, 6.0], vec![6.0, 7.0]).unwrap();
/// let swap = VanillaSwap::new(100.0, fixed, floating, SwapDirection::PayFixed);
///
/// assert_eq!(swap.first_fixing_time(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaSwap {
    notional: f64,
    fixed_leg: FixedLeg,
    floating_leg: FloatingLeg,
    direction: SwapDirection,
}

impl VanillaSwap {
    /// Construct a swap from its two legs.
    pub fn new(
        notional: f64,
        fixed_leg: FixedLeg,
        floating_leg: FloatingLeg,
        direction: SwapDirection,
    ) -> Self {
        Self {
            notional,
            fixed_leg,
            floating_leg,
            direction,
        }
    }

    /// Notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Fixed leg.
    #[inline]
    pub fn fixed_leg(&self) -> &FixedLeg {
        &self.fixed_leg
    }

    /// Floating leg.
    #[inline]
    pub fn floating_leg(&self) -> &FloatingLeg {
        &self.floating_leg
    }

    /// Direction from the holder's point of view.
    #[inline]
    pub fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// First floating fixing time.
    ///
    /// The earliest instant at which the swap's remaining value stops being
    /// fully deterministic; used as the decision time for the forward-swap
    /// product variant.
    #[inline]
    pub fn first_fixing_time(&self) -> f64 {
        self.floating_leg.period_starts()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_leg_length_mismatch_rejected() {
        let result = FixedLeg::new(vec![1.0, 2.0], vec![1.0], 0.03);
        assert!(matches!(
            result,
            Err(InstrumentError::LegLengthMismatch {
                times: 2,
                fractions: 1,
            })
        ));
    }

    #[test]
    fn test_empty_legs_rejected() {
        assert_eq!(
            FixedLeg::new(Vec::new(), Vec::new(), 0.03).unwrap_err(),
            InstrumentError::EmptyLeg
        );
        assert_eq!(
            FloatingLeg::new(Vec::new(), Vec::new()).unwrap_err(),
            InstrumentError::EmptyLeg
        );
    }

    #[test]
    fn test_first_fixing_time() {
        let fixed = FixedLeg::new(vec![2.0], vec![1.0], 0.03).unwrap();
        let floating = FloatingLeg::new(vec![1.0, 1.5], vec![1.5, 2.0]).unwrap();
        let swap = VanillaSwap::new(1.0, fixed, floating, SwapDirection::ReceiveFixed);
        assert_eq!(swap.first_fixing_time(), 1.0);
    }
}
