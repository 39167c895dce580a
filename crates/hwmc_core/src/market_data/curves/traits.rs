//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Discount curve contract consumed by the pricing layer.
///
/// # Contract
///
/// - `discount_factor(t)` returns P(0, t), the price today of one unit of
///   currency paid at time `t` (in year fractions)
/// - `forward_discount_ratio(t1, t2)` returns P(0, t2) / P(0, t1), the
///   forward discount factor over [t1, t2]
///
/// # Invariants
///
/// - P(0, 0) = 1
/// - P(0, t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use hwmc_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.02_f64);
/// let df = curve.discount_factor(5.0).unwrap();
/// assert!((df - (-0.1_f64).exp()).abs() < 1e-12);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor P(0, t).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the forward discount factor P(0, t2) / P(0, t1).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if either maturity is negative.
    fn forward_discount_ratio(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(df2 / df1)
    }
}
