//! Simulation configuration.

use super::error::ConfigError;

/// Default number of paths per simulation block.
///
/// Bounds peak memory: one block's discount-factor buffer is
/// `block_size * total cash flows` doubles, regardless of the total path
/// count. Larger blocks amortise per-block overhead; smaller blocks cap
/// memory and give the scheduler more parallel work items.
pub const DEFAULT_BLOCK_SIZE: usize = 1000;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 100_000_000;

/// Immutable Monte Carlo run configuration.
///
/// Use [`SimulationConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```
/// use hwmc_pricing::mc::{SimulationConfig, DEFAULT_BLOCK_SIZE};
///
/// let config = SimulationConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.block_size(), DEFAULT_BLOCK_SIZE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    n_paths: usize,
    block_size: usize,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Total number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Paths per block.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Seed for reproducible runs; `None` defaults to 0.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError` if the path count is outside `[1, MAX_PATHS]` or the
    /// block size is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.block_size == 0 {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    block_size: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Set the total number of paths (required).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Override the block size (defaults to [`DEFAULT_BLOCK_SIZE`]).
    #[inline]
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Set the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError` if `n_paths` is missing or any value is invalid.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingParameter { name: "n_paths" })?;
        let config = SimulationConfig {
            n_paths,
            block_size: self.block_size.unwrap_or(DEFAULT_BLOCK_SIZE),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
