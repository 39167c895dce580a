//! Monte Carlo simulation core.
//!
//! # Architecture
//!
//! ```text
//! HullWhiteMonteCarloEngine
//! ├── SimulationConfig    (path count, block size, seed)
//! ├── covariance + Cholesky factor  (computed once, shared read-only)
//! └── per block (rayon worker):
//!     ├── PathRng         (deterministic per-block stream)
//!     ├── PathBlock       (transient discount-factor buffer)
//!     └── payoff::block_summary()   (pure reduction)
//! ```
//!
//! Blocks are statistically and computationally independent; the engine
//! combines their summaries in block order, so a fixed seed yields
//! bit-identical prices regardless of thread scheduling.

pub mod block;
pub mod config;
pub mod engine;
pub mod error;
pub mod payoff;

pub use block::{block_sizes, PathBlock};
pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_BLOCK_SIZE, MAX_PATHS};
pub use engine::{HullWhiteMonteCarloEngine, PricingResult};
pub use error::{ConfigError, EngineError};
pub use payoff::{block_summary, BlockSummary};
