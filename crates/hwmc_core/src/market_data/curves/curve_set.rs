//! Named-curve container.

use super::CurveEnum;
use crate::market_data::error::MarketDataError;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt;

/// Role a curve plays in pricing.
///
/// The engine discounts off the [`Discount`](CurveName::Discount) curve;
/// floating cash flows are projected off the [`Forward`](CurveName::Forward)
/// curve when one is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveName {
    /// Discounting curve (typically OIS).
    Discount,
    /// Projection curve for floating-rate fixings.
    Forward,
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveName::Discount => write!(f, "Discount"),
            CurveName::Forward => write!(f, "Forward"),
        }
    }
}

/// Container of named yield curves for a pricing call.
///
/// Lookups of unregistered names fail with
/// [`MarketDataError::CurveNotFound`]; the pricing layer surfaces that
/// unmodified since it indicates a setup defect.
///
/// # Example
///
/// ```
/// use hwmc_core::market_data::curves::{CurveEnum, CurveName, CurveSet, YieldCurve};
///
/// let mut curves = CurveSet::new();
/// curves.insert(CurveName::Discount, CurveEnum::flat(0.02_f64));
///
/// let discount = curves.discount_curve().unwrap();
/// assert!(discount.discount_factor(1.0).is_ok());
/// assert!(curves.get(&CurveName::Forward).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CurveSet<T: Float> {
    curves: HashMap<CurveName, CurveEnum<T>>,
}

impl<T: Float> Default for CurveSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CurveSet<T> {
    /// Create an empty curve set.
    #[inline]
    pub fn new() -> Self {
        Self {
            curves: HashMap::new(),
        }
    }

    /// Create a set holding a single flat discount curve.
    ///
    /// Convenience for single-curve setups and tests; the flat curve also
    /// serves as the projection curve (see [`forward_curve`](Self::forward_curve)).
    pub fn with_flat_discount(rate: T) -> Self {
        let mut set = Self::new();
        set.insert(CurveName::Discount, CurveEnum::flat(rate));
        set
    }

    /// Insert a curve, replacing any existing curve of the same name.
    #[inline]
    pub fn insert(&mut self, name: CurveName, curve: CurveEnum<T>) {
        self.curves.insert(name, curve);
    }

    /// Whether a curve of the given name is registered.
    #[inline]
    pub fn contains(&self, name: &CurveName) -> bool {
        self.curves.contains_key(name)
    }

    /// Look up a curve by name.
    ///
    /// # Errors
    ///
    /// `MarketDataError::CurveNotFound` if no curve of that name exists.
    pub fn get(&self, name: &CurveName) -> Result<&CurveEnum<T>, MarketDataError> {
        self.curves
            .get(name)
            .ok_or_else(|| MarketDataError::CurveNotFound {
                name: name.to_string(),
            })
    }

    /// The discounting curve.
    #[inline]
    pub fn discount_curve(&self) -> Result<&CurveEnum<T>, MarketDataError> {
        self.get(&CurveName::Discount)
    }

    /// The projection curve for floating fixings.
    ///
    /// Falls back to the discount curve in single-curve setups where no
    /// dedicated forward curve is registered.
    pub fn forward_curve(&self) -> Result<&CurveEnum<T>, MarketDataError> {
        if self.contains(&CurveName::Forward) {
            self.get(&CurveName::Forward)
        } else {
            self.discount_curve()
        }
    }
}
