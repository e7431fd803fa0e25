//! Linear interpolation between stored frequencies
//!
//! Interpolates in the complex plane. Targets outside the sweep take the
//! value of the closest end point; no extrapolation is done.

use super::core::NetworkParametersCollection;
use crate::constants::NEAR_ZERO;
use crate::error::{NetworkError, Result};
use crate::math::conversions::lerp_complex;
use crate::matrix::{port_out_of_range, PortMatrix};
use crate::parameter::NetworkParameter;

impl<M: PortMatrix> NetworkParametersCollection<M> {
    /// Interpolated parameter at (frequency, row, column)
    ///
    /// # Errors
    /// `EmptyCollection` if nothing is stored, `InvalidArgument` for a NaN
    /// frequency or a port index outside `[1, N]`.
    pub fn interpolate(
        &self,
        frequency: f64,
        row: usize,
        column: usize,
    ) -> Result<NetworkParameter> {
        self.check_ports(row, column)?;
        let (lower, upper, t) = self.bracket(frequency)?;

        let value_at = |idx: usize| -> Result<NetworkParameter> {
            self.entries[idx]
                .1
                .get(row, column)
                .copied()
                .ok_or_else(|| port_out_of_range(row, column, self.nports))
        };

        if lower == upper {
            return value_at(lower);
        }
        let a = value_at(lower)?.as_complex();
        let b = value_at(upper)?.as_complex();
        Ok(NetworkParameter::from(lerp_complex(a, b, t)))
    }

    /// Interpolated matrix at `frequency`, every port pair filled
    pub fn interpolated_matrix(&self, frequency: f64) -> Result<M> {
        let mut matrix = M::with_ports(self.nports);
        for row in 1..=self.nports {
            for column in 1..=self.nports {
                matrix.set(row, column, self.interpolate(frequency, row, column)?)?;
            }
        }
        Ok(matrix)
    }

    /// Indices of the bracketing entries and the fraction between them
    fn bracket(&self, frequency: f64) -> Result<(usize, usize, f64)> {
        let n = self.entries.len();
        if n == 0 {
            return Err(NetworkError::EmptyCollection);
        }
        if frequency.is_nan() {
            return Err(NetworkError::InvalidArgument(
                "interpolation frequency is NaN".to_string(),
            ));
        }

        let bracket = match self.entries.partition_point(|(f, _)| *f < frequency) {
            0 => (0, 0, 0.0),
            i if i == n => (n - 1, n - 1, 0.0),
            i if self.entries[i].0 == frequency => (i, i, 0.0),
            i => {
                let (f0, f1) = (self.entries[i - 1].0, self.entries[i].0);
                let span = f1 - f0;
                if span < NEAR_ZERO {
                    (i - 1, i - 1, 0.0)
                } else {
                    (i - 1, i, (frequency - f0) / span)
                }
            }
        };
        Ok(bracket)
    }
}
