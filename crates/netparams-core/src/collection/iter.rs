//! Ordered iteration, frequency ranges and cropping

use std::iter::FusedIterator;
use std::slice;

use super::core::NetworkParametersCollection;
use crate::error::Result;
use crate::matrix::PortMatrix;
use crate::parameter::NetworkParameter;

/// Ascending `(frequency, &matrix)` iterator
#[derive(Debug, Clone)]
pub struct Iter<'a, M> {
    inner: slice::Iter<'a, (f64, M)>,
}

impl<'a, M> Iterator for Iter<'a, M> {
    type Item = (f64, &'a M);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(f, m)| (*f, m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, M> DoubleEndedIterator for Iter<'a, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(f, m)| (*f, m))
    }
}

impl<'a, M> ExactSizeIterator for Iter<'a, M> {}

impl<'a, M> FusedIterator for Iter<'a, M> {}

impl<M: PortMatrix> NetworkParametersCollection<M> {
    /// Iterate over all entries in ascending frequency order
    pub fn iter(&self) -> Iter<'_, M> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over entries with `f_start <= f <= f_stop`, ascending
    ///
    /// Empty when `f_start > f_stop`.
    pub fn range(&self, f_start: f64, f_stop: f64) -> Iter<'_, M> {
        let (start, stop) = self.range_bounds(f_start, f_stop);
        Iter {
            inner: self.entries[start..stop].iter(),
        }
    }

    /// New collection holding only the entries in `[f_start, f_stop]`
    pub fn cropped(&self, f_start: f64, f_stop: f64) -> Self {
        let (start, stop) = self.range_bounds(f_start, f_stop);
        Self {
            nports: self.nports,
            entries: self.entries[start..stop].to_vec(),
            tie_break: self.tie_break,
        }
    }

    /// Values of one port pair across the whole sweep
    ///
    /// # Errors
    /// `InvalidArgument` for a port index outside `[1, N]`.
    pub fn series(&self, row: usize, column: usize) -> Result<Vec<(f64, NetworkParameter)>> {
        self.check_ports(row, column)?;
        Ok(self
            .entries
            .iter()
            .filter_map(|(f, m)| m.get(row, column).map(|v| (*f, *v)))
            .collect())
    }

    fn range_bounds(&self, f_start: f64, f_stop: f64) -> (usize, usize) {
        let start = self.entries.partition_point(|(f, _)| *f < f_start);
        let stop = self.entries.partition_point(|(f, _)| *f <= f_stop);
        (start, stop.max(start))
    }
}

impl<'a, M: PortMatrix> IntoIterator for &'a NetworkParametersCollection<M> {
    type Item = (f64, &'a M);
    type IntoIter = Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
