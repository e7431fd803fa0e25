//! Network parameter value type
//!
//! A single complex-valued coefficient (S-, Z-, Y-parameter entry) with
//! linear/dB magnitude and degree/radian phase views.
//!
//! The value is stored in polar form, magnitude in linear units and phase in
//! radians exactly as supplied, so a parameter built from polar data reports
//! back the magnitude it was given without a rectangular round-trip.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};

use num_complex::Complex64;

use crate::error::{NetworkError, Result};
use crate::math::conversions::{db_2_magnitude, degree_2_radian, magnitude_2_db, radian_2_degree};

/// One complex network parameter
///
/// Immutable once constructed. Equality compares magnitude and phase as
/// stored, without phase wraparound: 0° and 360° are different values.
/// A zero magnitude always carries phase 0, so every zero compares equal
/// to `ZERO` whatever phase it was built with.
///
/// Arithmetic (`*`, `/`, unary `-`) follows `f64` semantics and is not
/// validated: dividing by `ZERO` gives an infinite magnitude, as
/// `1.0 / 0.0` does for a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkParameter {
    /// Linear magnitude, always >= 0
    magnitude: f64,
    /// Phase in radians, not normalized
    phase: f64,
}

impl NetworkParameter {
    /// Unity parameter: 0 dB, 0°
    pub const ONE: NetworkParameter = NetworkParameter {
        magnitude: 1.0,
        phase: 0.0,
    };

    /// Zero parameter: -inf dB, 0°
    pub const ZERO: NetworkParameter = NetworkParameter {
        magnitude: 0.0,
        phase: 0.0,
    };

    /// Create from rectangular components
    ///
    /// Phase is `atan2(imaginary, real)`, so it lies in (-180°, 180°].
    ///
    /// # Example
    /// ```
    /// use netparams_core::NetworkParameter;
    /// let p = NetworkParameter::new(10.0, 10.0);
    /// assert!((p.phase_deg() - 45.0).abs() < 1e-12);
    /// ```
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self::polar(real.hypot(imaginary), imaginary.atan2(real))
    }

    /// Zero magnitude folds the phase to 0.
    #[inline]
    fn polar(magnitude: f64, phase: f64) -> Self {
        if magnitude == 0.0 {
            Self::ZERO
        } else {
            Self { magnitude, phase }
        }
    }

    /// Create from linear magnitude and phase in degrees
    ///
    /// # Errors
    /// `InvalidArgument` if the magnitude is negative or not finite, or the
    /// phase is not finite.
    pub fn from_polar_degree(magnitude: f64, phase_deg: f64) -> Result<Self> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(NetworkError::InvalidArgument(format!(
                "magnitude must be finite and non-negative, got {}",
                magnitude
            )));
        }
        Self::with_checked_phase(magnitude, degree_2_radian(phase_deg))
    }

    /// Create from magnitude in dB and phase in degrees
    ///
    /// `-inf` dB maps to an exact zero magnitude, and so does any finite dB
    /// value whose linear magnitude underflows `f64` (below about -6400 dB);
    /// such a value reads back as `-inf` dB.
    ///
    /// # Errors
    /// `InvalidArgument` if the dB value is NaN, or so large that the linear
    /// magnitude overflows to infinity (`+inf` dB included), or the phase is
    /// not finite.
    ///
    /// # Example
    /// ```
    /// use netparams_core::NetworkParameter;
    /// let p = NetworkParameter::from_polar_decibel_degree(40.0, 180.0).unwrap();
    /// assert!((p.magnitude() - 100.0).abs() < 1e-9);
    /// ```
    pub fn from_polar_decibel_degree(magnitude_db: f64, phase_deg: f64) -> Result<Self> {
        let magnitude = db_2_magnitude(magnitude_db);
        if !magnitude.is_finite() {
            return Err(NetworkError::InvalidArgument(format!(
                "magnitude of {} dB is not representable as a finite linear value",
                magnitude_db
            )));
        }
        Self::with_checked_phase(magnitude, degree_2_radian(phase_deg))
    }

    /// Magnitude must already be validated.
    fn with_checked_phase(magnitude: f64, phase: f64) -> Result<Self> {
        if !phase.is_finite() {
            return Err(NetworkError::InvalidArgument(format!(
                "phase must be finite, got {}",
                phase
            )));
        }
        Ok(Self::polar(magnitude, phase))
    }

    /// Linear magnitude
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Magnitude in dB (20*log10(|z|))
    #[inline]
    pub fn magnitude_db(&self) -> f64 {
        magnitude_2_db(self.magnitude)
    }

    /// Phase in radians
    #[inline]
    pub fn phase_rad(&self) -> f64 {
        self.phase
    }

    /// Phase in degrees
    #[inline]
    pub fn phase_deg(&self) -> f64 {
        radian_2_degree(self.phase)
    }

    /// Real part
    #[inline]
    pub fn real(&self) -> f64 {
        self.magnitude * self.phase.cos()
    }

    /// Imaginary part
    #[inline]
    pub fn imaginary(&self) -> f64 {
        self.magnitude * self.phase.sin()
    }

    /// Rectangular form
    #[inline]
    pub fn as_complex(&self) -> Complex64 {
        Complex64::from_polar(self.magnitude, self.phase)
    }

    /// Complex conjugate
    pub fn conj(&self) -> Self {
        Self::polar(self.magnitude, -self.phase)
    }

    /// Compare by magnitude first, then by stored phase
    ///
    /// Phase is compared in radians as stored, without wrapping. Returns
    /// `None` when either side carries a NaN component.
    pub fn cmp_magnitude_phase(&self, other: &Self) -> Option<Ordering> {
        match self.magnitude.partial_cmp(&other.magnitude)? {
            Ordering::Equal => self.phase.partial_cmp(&other.phase),
            ord => Some(ord),
        }
    }

    /// Approximate equality in the complex plane
    ///
    /// True when the rectangular distance between both values is at most
    /// `tol`. Unlike `==`, this treats 0° and 360° as the same phase.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.as_complex() - other.as_complex()).norm() <= tol
    }
}

impl From<Complex64> for NetworkParameter {
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<NetworkParameter> for Complex64 {
    fn from(p: NetworkParameter) -> Self {
        p.as_complex()
    }
}

impl Mul for NetworkParameter {
    type Output = NetworkParameter;

    fn mul(self, rhs: NetworkParameter) -> NetworkParameter {
        NetworkParameter::polar(self.magnitude * rhs.magnitude, self.phase + rhs.phase)
    }
}

impl Div for NetworkParameter {
    type Output = NetworkParameter;

    fn div(self, rhs: NetworkParameter) -> NetworkParameter {
        NetworkParameter::polar(self.magnitude / rhs.magnitude, self.phase - rhs.phase)
    }
}

impl Neg for NetworkParameter {
    type Output = NetworkParameter;

    fn neg(self) -> NetworkParameter {
        NetworkParameter::polar(self.magnitude, self.phase + std::f64::consts::PI)
    }
}

impl fmt::Display for NetworkParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} dB ∠ {:.3}°", self.magnitude_db(), self.phase_deg())
    }
}
