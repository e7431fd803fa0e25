//! Frequency-indexed collection of port matrices
//!
//! Provides the sorted sweep container together with exact and nearest
//! frequency lookup, ranged iteration, interpolation and ndarray conversion.

mod array;
mod core;
mod index;
mod interpolation;
mod iter;
mod nearest;

pub use self::core::NetworkParametersCollection;
pub use iter::Iter;
pub use nearest::NearestTieBreak;
