//! Hull-White model parameters.

use thiserror::Error;

/// Sentinel closing the last volatility segment.
///
/// The final boundary of the padded time grid; `f64::min` against it never
/// selects it, so the sentinel is never fed into an exponential.
pub const TIME_INFINITY: f64 = f64::INFINITY;

/// Errors raised by parameter construction.
///
/// These correspond to malformed configuration and are never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The volatility array was empty.
    #[error("volatility must have at least one segment")]
    EmptyVolatility,

    /// Boundary count does not match the segment count.
    #[error("expected {expected} segment boundaries for {segments} volatility segments, got {actual}")]
    BoundaryCountMismatch {
        /// Required number of interior boundaries (`segments - 1`).
        expected: usize,
        /// Number of volatility segments supplied.
        segments: usize,
        /// Number of boundaries actually supplied.
        actual: usize,
    },

    /// Interior boundaries must be strictly increasing and positive.
    #[error("segment boundaries must be strictly increasing and positive (index {index})")]
    NonIncreasingBoundaries {
        /// Index of the first offending boundary.
        index: usize,
    },
}

/// Immutable piecewise-constant Hull-White parameter set.
///
/// Volatility segment `j` applies on `[t_j, t_{j+1})` where the boundary
/// grid is the caller's interior boundaries padded with `0.0` in front and
/// [`TIME_INFINITY`] at the back. With `n` volatility segments the padded
/// grid holds `n + 1` boundaries.
///
/// The set is immutable after construction and is shared read-only across
/// simulation blocks.
///
/// # Example
///
/// ```
/// use hwmc_models::hullwhite::HullWhiteParameters;
///
/// // Two segments: 1% up to t = 2, then 1.5%
/// let params = HullWhiteParameters::new(0.05, vec![0.010, 0.015], vec![2.0]).unwrap();
/// assert_eq!(params.volatility_time().len(), 3);
/// assert_eq!(params.volatility_time()[0], 0.0);
/// assert!(params.volatility_time()[2].is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HullWhiteParameters {
    /// Mean reversion speed `a`.
    mean_reversion: f64,
    /// Volatility per segment.
    volatility: Vec<f64>,
    /// Padded segment boundaries: `[0, interior..., TIME_INFINITY]`.
    volatility_time: Vec<f64>,
}

impl HullWhiteParameters {
    /// Construct a parameter set from interior segment boundaries.
    ///
    /// The caller supplies `volatility.len() - 1` interior boundaries; the
    /// constructor pads the grid with the `0` and infinite-time sentinels.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyVolatility`] if no segments are supplied
    /// - [`ModelError::BoundaryCountMismatch`] if the boundary count is not
    ///   `volatility.len() - 1`
    /// - [`ModelError::NonIncreasingBoundaries`] if the interior boundaries
    ///   are not strictly increasing and positive
    pub fn new(
        mean_reversion: f64,
        volatility: Vec<f64>,
        segment_boundaries: Vec<f64>,
    ) -> Result<Self, ModelError> {
        if volatility.is_empty() {
            return Err(ModelError::EmptyVolatility);
        }
        if segment_boundaries.len() != volatility.len() - 1 {
            return Err(ModelError::BoundaryCountMismatch {
                expected: volatility.len() - 1,
                segments: volatility.len(),
                actual: segment_boundaries.len(),
            });
        }
        let mut prev = 0.0;
        for (i, &t) in segment_boundaries.iter().enumerate() {
            if t <= prev || !t.is_finite() {
                return Err(ModelError::NonIncreasingBoundaries { index: i });
            }
            prev = t;
        }

        let mut volatility_time = Vec::with_capacity(volatility.len() + 1);
        volatility_time.push(0.0);
        volatility_time.extend_from_slice(&segment_boundaries);
        volatility_time.push(TIME_INFINITY);

        Ok(Self {
            mean_reversion,
            volatility,
            volatility_time,
        })
    }

    /// Single-segment convenience constructor.
    pub fn constant_volatility(mean_reversion: f64, volatility: f64) -> Result<Self, ModelError> {
        Self::new(mean_reversion, vec![volatility], Vec::new())
    }

    /// Mean reversion speed `a`.
    #[inline]
    pub fn mean_reversion(&self) -> f64 {
        self.mean_reversion
    }

    /// Volatility per segment.
    #[inline]
    pub fn volatility(&self) -> &[f64] {
        &self.volatility
    }

    /// Padded segment boundaries, `volatility().len() + 1` entries.
    #[inline]
    pub fn volatility_time(&self) -> &[f64] {
        &self.volatility_time
    }

    /// Number of volatility segments.
    #[inline]
    pub fn n_segments(&self) -> usize {
        self.volatility.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_padded_grid_shape() {
        let params = HullWhiteParameters::new(0.01, vec![0.01, 0.012, 0.014], vec![1.0, 3.0]).unwrap();
        // n segments -> n + 1 padded boundaries
        assert_eq!(params.volatility_time().len(), params.volatility().len() + 1);
        assert_eq!(params.volatility_time()[0], 0.0);
        assert_eq!(params.volatility_time()[1], 1.0);
        assert_eq!(params.volatility_time()[2], 3.0);
        assert_eq!(*params.volatility_time().last().unwrap(), TIME_INFINITY);
    }

    #[test]
    fn test_single_segment() {
        let params = HullWhiteParameters::constant_volatility(0.01, 0.01).unwrap();
        assert_eq!(params.n_segments(), 1);
        assert_eq!(params.volatility_time(), &[0.0, TIME_INFINITY]);
    }

    #[test]
    fn test_empty_volatility_rejected() {
        let result = HullWhiteParameters::new(0.01, Vec::new(), Vec::new());
        assert_eq!(result.unwrap_err(), ModelError::EmptyVolatility);
    }

    #[test]
    fn test_boundary_count_mismatch_rejected() {
        let result = HullWhiteParameters::new(0.01, vec![0.01, 0.012], vec![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ModelError::BoundaryCountMismatch {
                expected: 1,
                segments: 2,
                actual: 2,
            })
        ));
    }

    #[test]
    fn test_unsorted_boundaries_rejected() {
        let result = HullWhiteParameters::new(0.01, vec![0.01; 3], vec![2.0, 1.0]);
        assert!(matches!(
            result,
            Err(ModelError::NonIncreasingBoundaries { index: 1 })
        ));
    }

    #[test]
    fn test_non_positive_boundary_rejected() {
        let result = HullWhiteParameters::new(0.01, vec![0.01, 0.012], vec![0.0]);
        assert!(matches!(
            result,
            Err(ModelError::NonIncreasingBoundaries { index: 0 })
        ));
    }

    #[test]
    fn test_parameters_are_clonable_value_types() {
        let params = HullWhiteParameters::constant_volatility(0.05, 0.02).unwrap();
        let cloned = params.clone();
        assert_eq!(params, cloned);
    }

    proptest! {
        #[test]
        fn prop_padded_grid_shape_for_any_segment_count(
            volatility in prop::collection::vec(1e-4_f64..0.1, 1..12),
            gaps in prop::collection::vec(0.1_f64..5.0, 0..11),
        ) {
            // Strictly increasing interior boundaries, one fewer than the
            // segment count.
            let mut boundaries = Vec::with_capacity(volatility.len() - 1);
            let mut t = 0.0;
            for gap in gaps.iter().take(volatility.len() - 1) {
                t += gap;
                boundaries.push(t);
            }
            prop_assume!(boundaries.len() == volatility.len() - 1);

            let params =
                HullWhiteParameters::new(0.01, volatility.clone(), boundaries).unwrap();
            let grid = params.volatility_time();
            prop_assert_eq!(grid.len(), volatility.len() + 1);
            prop_assert_eq!(grid[0], 0.0);
            prop_assert_eq!(*grid.last().unwrap(), TIME_INFINITY);
            prop_assert!(grid.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_mismatched_boundary_count_always_errors(
            n_segments in 1usize..8,
            n_boundaries in 0usize..8,
        ) {
            prop_assume!(n_boundaries != n_segments - 1);
            let boundaries: Vec<f64> = (1..=n_boundaries).map(|i| i as f64).collect();
            let result = HullWhiteParameters::new(0.01, vec![0.01; n_segments], boundaries);
            prop_assert!(
                matches!(result, Err(ModelError::BoundaryCountMismatch { .. })),
                "expected BoundaryCountMismatch, got {:?}",
                result
            );
        }
    }
}
