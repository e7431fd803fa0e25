//! `collection[(frequency, row, column)]` indexing
//!
//! Reads panic where [`get`](NetworkParametersCollection::get) would return
//! an error. Writes create the matrix at a new frequency like
//! [`set`](NetworkParametersCollection::set) and panic on invalid arguments.

use std::ops::{Index, IndexMut};

use super::core::NetworkParametersCollection;
use crate::matrix::PortMatrix;
use crate::parameter::NetworkParameter;

impl<M: PortMatrix> Index<(f64, usize, usize)> for NetworkParametersCollection<M> {
    type Output = NetworkParameter;

    fn index(&self, (frequency, row, column): (f64, usize, usize)) -> &NetworkParameter {
        let matrix = match self.matrix(frequency) {
            Some(matrix) => matrix,
            None => panic!("no matrix stored at frequency {} Hz", frequency),
        };
        match matrix.get(row, column) {
            Some(value) => value,
            None => panic!(
                "port index ({}, {}) outside [1, {}]",
                row,
                column,
                self.port_count()
            ),
        }
    }
}

impl<M: PortMatrix> IndexMut<(f64, usize, usize)> for NetworkParametersCollection<M> {
    fn index_mut(
        &mut self,
        (frequency, row, column): (f64, usize, usize),
    ) -> &mut NetworkParameter {
        match self.entry_mut(frequency, row, column) {
            Ok(slot) => slot,
            Err(e) => panic!("{}", e),
        }
    }
}
