//! Unit conversion functions
//!
//! Conversions between the linear, decibel, degree and radian views of a
//! complex network parameter.

use num_complex::Complex64;

/// Convert linear magnitude to dB (20*log10(mag))
///
/// A zero magnitude maps to negative infinity.
#[inline]
pub fn magnitude_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert dB to linear magnitude (10^(dB/20))
///
/// Negative infinity maps to exactly zero.
#[inline]
pub fn db_2_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert degrees to radians
#[inline]
pub fn degree_2_radian(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees
#[inline]
pub fn radian_2_degree(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Convert (magnitude, degree) to rectangular form
pub fn magdeg_2_reim(mag: f64, deg: f64) -> Complex64 {
    Complex64::from_polar(mag, degree_2_radian(deg))
}

/// Convert (dB, degree) to rectangular form
pub fn dbdeg_2_reim(db: f64, deg: f64) -> Complex64 {
    magdeg_2_reim(db_2_magnitude(db), deg)
}

/// Magnitude of a complex number in dB
pub fn complex_2_db(z: Complex64) -> f64 {
    magnitude_2_db(z.norm())
}

/// Phase of a complex number in degrees, in (-180, 180]
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Linear interpolation between two complex samples
///
/// `t = 0` yields `a`, `t = 1` yields `b`.
pub fn lerp_complex(a: Complex64, b: Complex64, t: f64) -> Complex64 {
    a * (1.0 - t) + b * t
}
