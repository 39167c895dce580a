//! Generic decision/impact schedule.
//!
//! The schedule is the hand-off between instrument semantics and the
//! simulation engine: a set of ascending decision times, each carrying the
//! deterministic cash flows realised if that decision point is reached.
//! The engine is entirely agnostic of the product variant that produced it.

use hwmc_core::market_data::curves::CurveSet;
use hwmc_core::MarketDataError;
use thiserror::Error;

use crate::instruments::{fixed_equivalent, RateProduct};

/// Errors raised by schedule construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The three top-level arrays differ in length.
    #[error("schedule arrays must be parallel: {decisions} decision times, {impact_times} impact time rows, {impact_amounts} impact amount rows")]
    LengthMismatch {
        /// Number of decision times.
        decisions: usize,
        /// Number of impact time rows.
        impact_times: usize,
        /// Number of impact amount rows.
        impact_amounts: usize,
    },

    /// An impact time row and its amount row differ in length.
    #[error("impact times and amounts for decision {index} must be parallel ({times} vs {amounts})")]
    ImpactLengthMismatch {
        /// Decision index.
        index: usize,
        /// Length of the impact time row.
        times: usize,
        /// Length of the impact amount row.
        amounts: usize,
    },

    /// A schedule must carry at least one decision time.
    #[error("schedule must have at least one decision time")]
    Empty,

    /// Decision times must be strictly ascending.
    #[error("decision times must be strictly ascending (index {index})")]
    NonAscendingDecisionTimes {
        /// Index of the first offending decision time.
        index: usize,
    },

    /// Curve lookup failure while building the cash-flow equivalent.
    #[error(transparent)]
    Market(#[from] MarketDataError),
}

/// Ordered decision times with their deterministic impact cash flows.
///
/// Built once per pricing call, consumed once by the engine, then
/// discarded; immutable after construction.
///
/// # Invariants (enforced by [`new`](Self::new))
///
/// - the three top-level arrays are parallel
/// - each impact time row is parallel to its amount row
/// - decision times are strictly ascending and non-empty
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionSchedule {
    decision_times: Vec<f64>,
    impact_times: Vec<Vec<f64>>,
    impact_amounts: Vec<Vec<f64>>,
}

impl DecisionSchedule {
    /// Construct a schedule, validating all invariants.
    pub fn new(
        decision_times: Vec<f64>,
        impact_times: Vec<Vec<f64>>,
        impact_amounts: Vec<Vec<f64>>,
    ) -> Result<Self, ScheduleError> {
        if decision_times.len() != impact_times.len()
            || decision_times.len() != impact_amounts.len()
        {
            return Err(ScheduleError::LengthMismatch {
                decisions: decision_times.len(),
                impact_times: impact_times.len(),
                impact_amounts: impact_amounts.len(),
            });
        }
        if decision_times.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for (i, (t_row, a_row)) in impact_times.iter().zip(&impact_amounts).enumerate() {
            if t_row.len() != a_row.len() {
                return Err(ScheduleError::ImpactLengthMismatch {
                    index: i,
                    times: t_row.len(),
                    amounts: a_row.len(),
                });
            }
        }
        for i in 1..decision_times.len() {
            if decision_times[i] <= decision_times[i - 1] {
                return Err(ScheduleError::NonAscendingDecisionTimes { index: i });
            }
        }
        Ok(Self {
            decision_times,
            impact_times,
            impact_amounts,
        })
    }

    /// Build the schedule for a product.
    ///
    /// Matches the [`RateProduct`] variants exhaustively; this is one of
    /// the two paired match sites (the other is the payoff aggregator), so
    /// a new variant fails to compile until both are extended.
    pub fn from_product(
        product: &RateProduct,
        curves: &CurveSet<f64>,
    ) -> Result<Self, ScheduleError> {
        match product {
            RateProduct::EuropeanSwaption(swaption) => {
                // Single decision at expiry; the underlying swap collapses
                // to its deterministic cash-flow equivalent.
                let (times, amounts) = fixed_equivalent(swaption.underlying(), curves)?.into_parts();
                Self::new(vec![swaption.expiry()], vec![times], vec![amounts])
            }
            RateProduct::ForwardSwap(swap) => {
                let decision = swap.first_fixing_time();
                let (times, amounts) = fixed_equivalent(swap, curves)?.into_parts();
                Self::new(vec![decision], vec![times], vec![amounts])
            }
        }
    }

    /// Decision times, strictly ascending.
    #[inline]
    pub fn decision_times(&self) -> &[f64] {
        &self.decision_times
    }

    /// Impact times per decision.
    #[inline]
    pub fn impact_times(&self) -> &[Vec<f64>] {
        &self.impact_times
    }

    /// Impact amounts per decision, parallel to [`impact_times`](Self::impact_times).
    #[inline]
    pub fn impact_amounts(&self) -> &[Vec<f64>] {
        &self.impact_amounts
    }

    /// Number of decision times.
    #[inline]
    pub fn n_decisions(&self) -> usize {
        self.decision_times.len()
    }

    /// The last decision time, which the engine uses as the numeraire date.
    #[inline]
    pub fn last_decision_time(&self) -> f64 {
        self.decision_times[self.decision_times.len() - 1]
    }
}
