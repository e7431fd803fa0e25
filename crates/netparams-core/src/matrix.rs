//! Port matrices
//!
//! The `PortMatrix` trait is the capability a frequency collection needs
//! from its per-frequency data: an `N x N` grid of network parameters
//! addressed by 1-based (row, column) port numbers.

use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;

use crate::error::{NetworkError, Result};
use crate::parameter::NetworkParameter;

/// An `N x N` grid of network parameters indexed by 1-based port numbers
pub trait PortMatrix: Clone {
    /// Create a matrix for `nports` ports with every entry defaulted
    fn with_ports(nports: usize) -> Self;

    /// Number of ports (`N`)
    fn nports(&self) -> usize;

    /// Entry at (row, column), `None` when either index is outside `[1, N]`
    fn get(&self, row: usize, column: usize) -> Option<&NetworkParameter>;

    /// Mutable entry at (row, column), `None` when out of range
    fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut NetworkParameter>;

    /// Assign entry at (row, column)
    ///
    /// # Errors
    /// `InvalidArgument` when either index is outside `[1, N]`.
    fn set(&mut self, row: usize, column: usize, value: NetworkParameter) -> Result<()> {
        let nports = self.nports();
        match self.get_mut(row, column) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(port_out_of_range(row, column, nports)),
        }
    }
}

pub(crate) fn port_out_of_range(row: usize, column: usize, nports: usize) -> NetworkError {
    NetworkError::InvalidArgument(format!(
        "port index ({}, {}) outside [1, {}]",
        row, column, nports
    ))
}

/// Scattering parameter matrix
///
/// New matrices start with every entry at `NetworkParameter::ONE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatteringMatrix {
    /// Entries, 0-based internally
    s: Array2<NetworkParameter>,
}

impl ScatteringMatrix {
    /// Build from a complex `[nports, nports]` array
    ///
    /// # Errors
    /// `DimensionMismatch` if the array is not square or is empty.
    pub fn from_complex(s: ArrayView2<'_, Complex64>) -> Result<Self> {
        let (rows, cols) = s.dim();
        if rows != cols || rows == 0 {
            return Err(NetworkError::DimensionMismatch {
                expected: "non-empty square matrix".to_string(),
                actual: format!("{}x{}", rows, cols),
            });
        }
        Ok(Self {
            s: s.mapv(NetworkParameter::from),
        })
    }

    /// Entries in rectangular form, 0-based
    pub fn to_complex(&self) -> Array2<Complex64> {
        self.s.mapv(|p| p.as_complex())
    }

    /// Iterate over `(row, column, value)` with 1-based indices, row-major
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &NetworkParameter)> + '_ {
        self.s
            .indexed_iter()
            .map(|((i, j), value)| (i + 1, j + 1, value))
    }

    /// Diagonal entries S11, S22, ... in port order
    pub fn reflections(&self) -> Vec<NetworkParameter> {
        self.s.diag().to_vec()
    }

    /// True if S_ij == S_ji for every port pair, within `tol`
    pub fn is_reciprocal(&self, tol: f64) -> bool {
        let n = self.nports();
        (0..n).all(|i| (i + 1..n).all(|j| self.s[[i, j]].approx_eq(&self.s[[j, i]], tol)))
    }
}

impl PortMatrix for ScatteringMatrix {
    fn with_ports(nports: usize) -> Self {
        Self {
            s: Array2::from_elem((nports, nports), NetworkParameter::ONE),
        }
    }

    #[inline]
    fn nports(&self) -> usize {
        self.s.nrows()
    }

    fn get(&self, row: usize, column: usize) -> Option<&NetworkParameter> {
        let (i, j) = (row.checked_sub(1)?, column.checked_sub(1)?);
        self.s.get((i, j))
    }

    fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut NetworkParameter> {
        let (i, j) = (row.checked_sub(1)?, column.checked_sub(1)?);
        self.s.get_mut((i, j))
    }
}
