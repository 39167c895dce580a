//! Yield curves and the named-curve container.

pub mod curve_enum;
pub mod curve_set;
pub mod flat;
pub mod interpolated;
pub mod traits;

pub use curve_enum::CurveEnum;
pub use curve_set::{CurveName, CurveSet};
pub use flat::FlatCurve;
pub use interpolated::InterpolatedCurve;
pub use traits::YieldCurve;
