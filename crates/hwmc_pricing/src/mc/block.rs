//! Block partitioning and the per-block discount-factor buffer.

use hwmc_models::DecisionSchedule;

/// Split `n_paths` into blocks of `block_size`, the last taking the
/// remainder.
///
/// The returned counts always sum to `n_paths` exactly.
///
/// # Example
///
/// ```
/// use hwmc_pricing::mc::block_sizes;
///
/// assert_eq!(block_sizes(2500, 1000), vec![1000, 1000, 500]);
/// assert_eq!(block_sizes(2000, 1000), vec![1000, 1000]);
/// ```
///
/// # Panics
///
/// Debug-asserts `block_size > 0`; validated upstream by the
/// configuration.
pub fn block_sizes(n_paths: usize, block_size: usize) -> Vec<usize> {
    debug_assert!(block_size > 0);
    let full = n_paths / block_size;
    let remainder = n_paths % block_size;
    let mut sizes = vec![block_size; full];
    if remainder > 0 {
        sizes.push(remainder);
    }
    sizes
}

/// Simulated discount factors for one block of paths.
///
/// Conceptually `df[path][decision][cashflow]`, stored flat: one stride of
/// `total cash flows` doubles per path, with the per-decision regions laid
/// out by `offsets`. The buffer lives strictly within one block: filled by
/// the engine, read once by the payoff aggregator, then dropped.
#[derive(Debug, Clone)]
pub struct PathBlock {
    n_paths: usize,
    /// Start of each decision's cash-flow region within a path's stride.
    offsets: Vec<usize>,
    /// Total cash flows per path.
    stride: usize,
    values: Vec<f64>,
}

impl PathBlock {
    /// Allocate a zeroed buffer shaped for `schedule` and `n_paths` paths.
    pub fn for_schedule(schedule: &DecisionSchedule, n_paths: usize) -> Self {
        let mut offsets = Vec::with_capacity(schedule.n_decisions());
        let mut stride = 0;
        for row in schedule.impact_times() {
            offsets.push(stride);
            stride += row.len();
        }
        Self {
            n_paths,
            offsets,
            stride,
            values: vec![0.0; n_paths * stride],
        }
    }

    /// Number of paths in this block.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Simulated discount factor for `(path, decision, cashflow)`.
    #[inline]
    pub fn df(&self, path: usize, decision: usize, cashflow: usize) -> f64 {
        self.values[path * self.stride + self.offsets[decision] + cashflow]
    }

    /// Store a simulated discount factor.
    #[inline]
    pub fn set_df(&mut self, path: usize, decision: usize, cashflow: usize, value: f64) {
        self.values[path * self.stride + self.offsets[decision] + cashflow] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwmc_models::DecisionSchedule;
    use proptest::prelude::*;

    fn two_decision_schedule() -> DecisionSchedule {
        DecisionSchedule::new(
            vec![1.0, 2.0],
            vec![vec![1.0, 3.0], vec![2.0, 3.0, 4.0]],
            vec![vec![1.0, 1.0], vec![1.0, 1.0, 1.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_block_sizes_exact_division() {
        assert_eq!(block_sizes(2000, 1000), vec![1000, 1000]);
    }

    #[test]
    fn test_block_sizes_with_remainder() {
        assert_eq!(block_sizes(2500, 1000), vec![1000, 1000, 500]);
    }

    #[test]
    fn test_block_sizes_single_short_block() {
        assert_eq!(block_sizes(7, 1000), vec![7]);
    }

    #[test]
    fn test_block_sizes_sum_invariant() {
        for (n, s) in [(1, 1), (999, 1000), (1000, 1000), (1001, 1000), (12_345, 777)] {
            let total: usize = block_sizes(n, s).iter().sum();
            assert_eq!(total, n, "n={n} s={s}");
        }
    }

    #[test]
    fn test_path_block_layout_roundtrip() {
        let schedule = two_decision_schedule();
        let mut block = PathBlock::for_schedule(&schedule, 3);
        assert_eq!(block.n_paths(), 3);

        block.set_df(2, 1, 2, 0.75);
        block.set_df(0, 0, 1, 0.25);
        assert_eq!(block.df(2, 1, 2), 0.75);
        assert_eq!(block.df(0, 0, 1), 0.25);
        // Untouched entries stay zero.
        assert_eq!(block.df(1, 0, 0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_partition_covers_all_paths(
            n_paths in 1usize..1_000_000,
            block_size in 1usize..10_000,
        ) {
            let sizes = block_sizes(n_paths, block_size);
            prop_assert_eq!(sizes.iter().sum::<usize>(), n_paths);
            // Every block except possibly the last is full.
            for &size in &sizes[..sizes.len() - 1] {
                prop_assert_eq!(size, block_size);
            }
            prop_assert!(*sizes.last().unwrap() <= block_size);
            prop_assert!(*sizes.last().unwrap() > 0);
        }
    }
}
