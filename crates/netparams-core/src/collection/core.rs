//! Core collection struct, construction and exact access
//!
//! Entries are kept in a `Vec` sorted by ascending frequency. Lookups and
//! insertion points are found by binary search.

use tracing::debug;

use super::nearest::NearestTieBreak;
use crate::error::{NetworkError, Result};
use crate::matrix::{port_out_of_range, PortMatrix, ScatteringMatrix};
use crate::parameter::NetworkParameter;

/// Frequency-ordered sweep of `N x N` port matrices
///
/// Frequencies are in Hz, unique, and always stored in ascending order.
#[derive(Debug, Clone)]
pub struct NetworkParametersCollection<M: PortMatrix = ScatteringMatrix> {
    /// Number of ports of every stored matrix
    pub(super) nports: usize,
    /// (frequency, matrix), sorted by frequency
    pub(super) entries: Vec<(f64, M)>,
    /// Midpoint policy for nearest lookup
    pub(super) tie_break: NearestTieBreak,
}

impl<M: PortMatrix> NetworkParametersCollection<M> {
    /// Create an empty collection for `port_count` ports
    ///
    /// # Errors
    /// `InvalidArgument` if `port_count` is zero.
    ///
    /// # Example
    /// ```
    /// use netparams_core::{NetworkParameter, NetworkParametersCollection};
    /// let mut sweep: NetworkParametersCollection = NetworkParametersCollection::new(2).unwrap();
    /// sweep.set(1e9, 2, 1, NetworkParameter::new(0.5, 0.0)).unwrap();
    /// assert_eq!(sweep.len(), 1);
    /// ```
    pub fn new(port_count: usize) -> Result<Self> {
        if port_count < 1 {
            return Err(NetworkError::InvalidArgument(
                "port count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            nports: port_count,
            entries: Vec::new(),
            tie_break: NearestTieBreak::default(),
        })
    }

    /// Build from `(frequency, matrix)` pairs in any order
    ///
    /// A repeated frequency replaces the matrix given earlier.
    pub fn from_entries<I>(port_count: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, M)>,
    {
        let mut collection = Self::new(port_count)?;
        for (frequency, matrix) in entries {
            collection.insert_matrix(frequency, matrix)?;
        }
        debug!(
            nfreq = collection.len(),
            nports = port_count,
            "built network parameter collection"
        );
        Ok(collection)
    }

    /// Set the midpoint policy used by nearest lookup
    pub fn with_tie_break(mut self, tie_break: NearestTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Midpoint policy used by nearest lookup
    #[inline]
    pub fn tie_break(&self) -> NearestTieBreak {
        self.tie_break
    }

    /// Number of ports
    #[inline]
    pub fn port_count(&self) -> usize {
        self.nports
    }

    /// Number of distinct frequencies
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored frequencies in Hz, ascending
    pub fn frequencies(&self) -> Vec<f64> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    /// Lowest frequency entry
    pub fn first(&self) -> Option<(f64, &M)> {
        self.entries.first().map(|(f, m)| (*f, m))
    }

    /// Highest frequency entry
    pub fn last(&self) -> Option<(f64, &M)> {
        self.entries.last().map(|(f, m)| (*f, m))
    }

    pub fn contains_frequency(&self, frequency: f64) -> bool {
        self.position(frequency).is_ok()
    }

    /// Matrix stored at exactly `frequency`
    pub fn matrix(&self, frequency: f64) -> Option<&M> {
        self.position(frequency).ok().map(|idx| &self.entries[idx].1)
    }

    /// Read the parameter at (frequency, row, column)
    ///
    /// The frequency must match a stored one exactly.
    ///
    /// # Errors
    /// `InvalidArgument` for a port index outside `[1, N]`, `NotFound` when no
    /// matrix is stored at `frequency`.
    pub fn get(&self, frequency: f64, row: usize, column: usize) -> Result<NetworkParameter> {
        self.check_ports(row, column)?;
        let matrix = self
            .matrix(frequency)
            .ok_or(NetworkError::NotFound { frequency })?;
        matrix
            .get(row, column)
            .copied()
            .ok_or_else(|| port_out_of_range(row, column, self.nports))
    }

    /// Write the parameter at (frequency, row, column)
    ///
    /// Creates the matrix at `frequency` if none exists yet. Overwrites any
    /// previous value at the same coordinate.
    ///
    /// # Errors
    /// `InvalidArgument` for a negative or non-finite frequency or a port
    /// index outside `[1, N]`. Nothing is modified on error.
    pub fn set(
        &mut self,
        frequency: f64,
        row: usize,
        column: usize,
        value: NetworkParameter,
    ) -> Result<()> {
        *self.entry_mut(frequency, row, column)? = value;
        Ok(())
    }

    /// Mutable slot at (frequency, row, column), creating the matrix if needed
    ///
    /// # Errors
    /// Same as [`set`](Self::set).
    pub fn entry_mut(
        &mut self,
        frequency: f64,
        row: usize,
        column: usize,
    ) -> Result<&mut NetworkParameter> {
        let frequency = check_frequency(frequency)?;
        self.check_ports(row, column)?;

        let idx = match self.position(frequency) {
            Ok(idx) => idx,
            Err(idx) => {
                debug!(frequency, index = idx, "creating matrix at new frequency");
                self.entries.insert(idx, (frequency, M::with_ports(self.nports)));
                idx
            }
        };

        let nports = self.nports;
        self.entries[idx]
            .1
            .get_mut(row, column)
            .ok_or_else(|| port_out_of_range(row, column, nports))
    }

    /// Store a whole matrix at `frequency`, returning the one it replaced
    ///
    /// # Errors
    /// `InvalidArgument` for a negative or non-finite frequency,
    /// `DimensionMismatch` if the matrix port count differs from the
    /// collection's.
    pub fn insert_matrix(&mut self, frequency: f64, matrix: M) -> Result<Option<M>> {
        let frequency = check_frequency(frequency)?;
        if matrix.nports() != self.nports {
            return Err(NetworkError::DimensionMismatch {
                expected: format!("{} ports", self.nports),
                actual: format!("{} ports", matrix.nports()),
            });
        }

        match self.position(frequency) {
            Ok(idx) => Ok(Some(std::mem::replace(&mut self.entries[idx].1, matrix))),
            Err(idx) => {
                self.entries.insert(idx, (frequency, matrix));
                Ok(None)
            }
        }
    }

    /// Remove and return the matrix stored at exactly `frequency`
    pub fn remove(&mut self, frequency: f64) -> Option<M> {
        let idx = self.position(frequency).ok()?;
        Some(self.entries.remove(idx).1)
    }

    /// `Ok(index)` of an exact match, or `Err(insertion index)`
    pub(super) fn position(&self, frequency: f64) -> std::result::Result<usize, usize> {
        let idx = self.entries.partition_point(|(f, _)| *f < frequency);
        match self.entries.get(idx) {
            Some((f, _)) if *f == frequency => Ok(idx),
            _ => Err(idx),
        }
    }

    pub(super) fn check_ports(&self, row: usize, column: usize) -> Result<()> {
        let valid = 1..=self.nports;
        if valid.contains(&row) && valid.contains(&column) {
            Ok(())
        } else {
            Err(port_out_of_range(row, column, self.nports))
        }
    }
}

/// Returns the frequency with `-0.0` folded into `0.0`.
fn check_frequency(frequency: f64) -> Result<f64> {
    if frequency.is_finite() && frequency >= 0.0 {
        Ok(frequency.abs())
    } else {
        Err(NetworkError::InvalidArgument(format!(
            "frequency must be finite and non-negative, got {} Hz",
            frequency
        )))
    }
}
