//! Interpolated discount curve.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Discount curve interpolated log-linearly in discount factors.
///
/// Built from bootstrapped pillar points `(t_i, P(0, t_i))`. Log-linear
/// interpolation in the discount factor is equivalent to piecewise-constant
/// forward rates, the usual convention for bootstrapped curves. Queries
/// beyond the last pillar extrapolate flat in the last forward rate.
///
/// The curve is implicitly anchored at `(0, 1)`.
///
/// # Example
///
/// ```
/// use hwmc_core::market_data::curves::{YieldCurve, InterpolatedCurve};
///
/// let curve = InterpolatedCurve::new(
///     vec![1.0_f64, 2.0, 5.0],
///     vec![0.98, 0.955, 0.88],
/// )
/// .unwrap();
///
/// // Pillars reprice exactly
/// assert!((curve.discount_factor(2.0).unwrap() - 0.955).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve<T: Float> {
    /// Pillar times, strictly increasing, all positive.
    times: Vec<T>,
    /// Log discount factors at the pillars.
    log_dfs: Vec<T>,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Build a curve from pillar times and discount factors.
    ///
    /// # Errors
    ///
    /// - `InsufficientPillars` if fewer than 2 pillars are supplied or the
    ///   two arrays differ in length
    /// - `NonMonotonicPillars` if times are not strictly increasing and
    ///   strictly positive
    /// - `InvalidDiscountFactor` if any discount factor is not positive
    pub fn new(times: Vec<T>, discount_factors: Vec<T>) -> Result<Self, MarketDataError> {
        if times.len() < 2 || times.len() != discount_factors.len() {
            return Err(MarketDataError::InsufficientPillars {
                count: times.len().min(discount_factors.len()),
            });
        }
        let mut prev = T::zero();
        for (i, &t) in times.iter().enumerate() {
            if t <= prev {
                return Err(MarketDataError::NonMonotonicPillars { index: i });
            }
            prev = t;
        }
        for (i, &df) in discount_factors.iter().enumerate() {
            if df <= T::zero() {
                return Err(MarketDataError::InvalidDiscountFactor {
                    df: df.to_f64().unwrap_or(f64::NAN),
                    index: i,
                });
            }
        }
        let log_dfs = discount_factors.iter().map(|df| df.ln()).collect();
        Ok(Self { times, log_dfs })
    }

    /// Number of pillars (excluding the implicit anchor at t = 0).
    #[inline]
    pub fn n_pillars(&self) -> usize {
        self.times.len()
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }

        let n = self.times.len();
        let last = self.times[n - 1];
        if t >= last {
            // Flat-forward extrapolation using the last segment slope; the
            // constructor guarantees at least 2 pillars.
            let slope =
                (self.log_dfs[n - 1] - self.log_dfs[n - 2]) / (last - self.times[n - 2]);
            return Ok((self.log_dfs[n - 1] + slope * (t - last)).exp());
        }

        // Locate the bracketing segment; the anchor (0, 1) closes the front.
        let mut lo_t = T::zero();
        let mut lo_l = T::zero();
        for i in 0..n {
            if t <= self.times[i] {
                let w = (t - lo_t) / (self.times[i] - lo_t);
                return Ok((lo_l + w * (self.log_dfs[i] - lo_l)).exp());
            }
            lo_t = self.times[i];
            lo_l = self.log_dfs[i];
        }
        unreachable!("t < last pillar implies a bracketing segment exists")
    }
}
