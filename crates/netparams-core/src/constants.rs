//! Numerical constants

/// Frequency spans narrower than this are treated as a single point when
/// interpolating.
pub const NEAR_ZERO: f64 = 1e-15;
