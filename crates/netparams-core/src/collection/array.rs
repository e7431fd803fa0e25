//! ndarray bridge for scattering-matrix sweeps
//!
//! Converts between a collection and the `[nfreq, nports, nports]` complex
//! array layout used by array-based network code.

use ndarray::{Array3, Axis};
use num_complex::Complex64;
use tracing::debug;

use super::core::NetworkParametersCollection;
use crate::error::{NetworkError, Result};
use crate::matrix::ScatteringMatrix;

impl NetworkParametersCollection<ScatteringMatrix> {
    /// Build from a frequency vector (Hz) and S-parameter data `[nfreq, nports, nports]`
    ///
    /// Frequencies need not be sorted. A repeated frequency keeps the last
    /// matrix given for it.
    ///
    /// # Errors
    /// `DimensionMismatch` if the array shape disagrees with the frequency
    /// count or is not square per frequency, `InvalidArgument` for a negative
    /// or non-finite frequency.
    pub fn from_array(frequencies: &[f64], s: &Array3<Complex64>) -> Result<Self> {
        let (nfreq, rows, cols) = s.dim();
        if nfreq != frequencies.len() || rows != cols || rows == 0 {
            return Err(NetworkError::DimensionMismatch {
                expected: format!("[{}, n, n] with n >= 1", frequencies.len()),
                actual: format!("[{}, {}, {}]", nfreq, rows, cols),
            });
        }

        let mut collection = Self::new(rows)?;
        for (&frequency, slice) in frequencies.iter().zip(s.axis_iter(Axis(0))) {
            collection.insert_matrix(frequency, ScatteringMatrix::from_complex(slice)?)?;
        }
        debug!(
            nfreq = collection.len(),
            nports = rows,
            "built collection from S-parameter array"
        );
        Ok(collection)
    }

    /// Frequency vector (Hz) and S-parameter data `[nfreq, nports, nports]`
    pub fn to_array(&self) -> (Vec<f64>, Array3<Complex64>) {
        let n = self.port_count();
        let mut s = Array3::<Complex64>::zeros((self.len(), n, n));
        for (mut slice, (_, matrix)) in s.outer_iter_mut().zip(self.iter()) {
            slice.assign(&matrix.to_complex());
        }
        (self.frequencies(), s)
    }
}
