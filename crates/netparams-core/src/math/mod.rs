//! Mathematical functions module
//!
//! Unit conversions between linear/dB magnitude and degree/radian phase.

pub mod conversions;

pub use conversions::*;
