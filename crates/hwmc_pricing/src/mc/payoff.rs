//! Per-block payoff reduction.

use hwmc_models::{DecisionSchedule, RateProduct};

use super::block::PathBlock;
use super::error::EngineError;

/// Pure statistics of one block's payoffs.
///
/// The aggregator holds no state of its own; the engine combines the
/// summaries of all blocks and performs the final division and numeraire
/// rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSummary {
    /// Sum of path payoffs.
    pub sum: f64,
    /// Sum of squared path payoffs (for the standard error).
    pub sum_squares: f64,
    /// Number of paths reduced.
    pub n_paths: usize,
}

impl BlockSummary {
    /// Arithmetic mean of the block's path payoffs.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.sum / self.n_paths as f64
    }
}

/// Reduce one block of simulated discount factors to payoff statistics.
///
/// Matches the [`RateProduct`] variants exhaustively; this is the second
/// of the two paired match sites (the first is the schedule builder).
///
/// - `EuropeanSwaption`: requires exactly one decision time; per path the
///   cash-flow-equivalent value `v = sum_k amount[0][k] * df(path, 0, k)`
///   is floored at zero (physical-settlement optionality).
/// - `ForwardSwap`: no optionality; the raw value summed over every
///   decision and impact entry.
///
/// # Errors
///
/// [`EngineError::ScheduleMismatch`] when a swaption schedule does not
/// have exactly one decision time.
pub fn block_summary(
    product: &RateProduct,
    schedule: &DecisionSchedule,
    block: &PathBlock,
) -> Result<BlockSummary, EngineError> {
    let amounts = schedule.impact_amounts();
    let mut sum = 0.0;
    let mut sum_squares = 0.0;

    match product {
        RateProduct::EuropeanSwaption(_) => {
            if schedule.n_decisions() != 1 {
                return Err(EngineError::ScheduleMismatch {
                    decisions: schedule.n_decisions(),
                });
            }
            for path in 0..block.n_paths() {
                let mut value = 0.0;
                for (k, &amount) in amounts[0].iter().enumerate() {
                    value += amount * block.df(path, 0, k);
                }
                let payoff = value.max(0.0);
                sum += payoff;
                sum_squares += payoff * payoff;
            }
        }
        RateProduct::ForwardSwap(_) => {
            for path in 0..block.n_paths() {
                let mut value = 0.0;
                for (i, row) in amounts.iter().enumerate() {
                    for (k, &amount) in row.iter().enumerate() {
                        value += amount * block.df(path, i, k);
                    }
                }
                sum += value;
                sum_squares += value * value;
            }
        }
    }

    Ok(BlockSummary {
        sum,
        sum_squares,
        n_paths: block.n_paths(),
    })
}
