//! Type-wide default numeric bounds for parameter values.
//!
//! A parameter without explicit `min`/`max` fields accepts the full
//! range representable for a floating value. The loader only narrows
//! these when the document provides its own bounds.

/// Default lower bound for a floating parameter value.
pub const DOUBLE_MIN: f64 = f64::MIN;

/// Default upper bound for a floating parameter value.
pub const DOUBLE_MAX: f64 = f64::MAX;
