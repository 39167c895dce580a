//! Static dispatch over concrete curve types.

use super::{FlatCurve, InterpolatedCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Closed set of concrete yield curve implementations.
///
/// Using an enum instead of `Box<dyn YieldCurve>` keeps curve storage
/// `Clone` and dispatch static, which matters in the Monte Carlo hot loop.
///
/// # Example
///
/// ```
/// use hwmc_core::market_data::curves::{CurveEnum, YieldCurve};
///
/// let curve = CurveEnum::flat(0.03_f64);
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - (-0.03_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEnum<T: Float> {
    /// Single constant rate for all maturities.
    Flat(FlatCurve<T>),
    /// Log-linear interpolation of bootstrapped discount factors.
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Convenience constructor for a flat curve.
    #[inline]
    pub fn flat(rate: T) -> Self {
        Self::Flat(FlatCurve::new(rate))
    }

    /// Convenience constructor for an interpolated curve.
    pub fn interpolated(
        times: Vec<T>,
        discount_factors: Vec<T>,
    ) -> Result<Self, MarketDataError> {
        Ok(Self::Interpolated(InterpolatedCurve::new(
            times,
            discount_factors,
        )?))
    }
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            Self::Flat(curve) => curve.discount_factor(t),
            Self::Interpolated(curve) => curve.discount_factor(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_variant_dispatch() {
        let curve = CurveEnum::flat(0.02_f64);
        assert_relative_eq!(
            curve.discount_factor(3.0).unwrap(),
            (-0.06_f64).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_interpolated_variant_dispatch() {
        let curve = CurveEnum::interpolated(vec![1.0_f64, 2.0], vec![0.98, 0.95]).unwrap();
        assert_relative_eq!(
            curve.discount_factor(2.0).unwrap(),
            0.95,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_interpolated_constructor_propagates_errors() {
        assert!(CurveEnum::interpolated(vec![1.0_f64], vec![0.98]).is_err());
    }
}
