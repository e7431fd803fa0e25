//! netparams-core: frequency-indexed RF network parameter data
//!
//! Complex network parameters (S-, Z-, Y-parameter entries) and swept
//! collections of port matrices keyed by frequency.
//!
//! ## Modules
//!
//! - `parameter` - Immutable complex parameter with dB/linear and degree/radian views
//! - `matrix` - Port matrix capability trait and the scattering matrix
//! - `collection` - Frequency-ordered sweep with exact and nearest lookup
//! - `math` - Unit conversions
//! - `error` - Error type

pub mod collection;
pub mod constants;
pub mod error;
pub mod math;
pub mod matrix;
pub mod parameter;

pub use collection::{NearestTieBreak, NetworkParametersCollection};
pub use error::{NetworkError, Result};
pub use matrix::{PortMatrix, ScatteringMatrix};
pub use parameter::NetworkParameter;
