//! Market data containers consumed by the pricing layer.

pub mod curves;
pub mod error;

pub use error::MarketDataError;
