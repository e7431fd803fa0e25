//! Nearest-frequency lookup
//!
//! Binary search for the insertion point of the target, then a comparison
//! of the two neighbours around it. Targets outside the sweep clamp to the
//! first or last entry.

use tracing::trace;

use super::core::NetworkParametersCollection;
use crate::error::{NetworkError, Result};
use crate::matrix::PortMatrix;

/// Which neighbour wins when the target is exactly halfway between two
/// stored frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NearestTieBreak {
    #[default]
    PreferLower,
    PreferUpper,
}

impl<M: PortMatrix> NetworkParametersCollection<M> {
    /// Matrix whose frequency is closest to `target`
    ///
    /// # Errors
    /// `EmptyCollection` if nothing is stored, `InvalidArgument` if `target`
    /// is NaN.
    pub fn nearest(&self, target: f64) -> Result<&M> {
        self.nearest_entry(target).map(|(_, m)| m)
    }

    /// Closest stored frequency to `target`
    pub fn nearest_frequency(&self, target: f64) -> Result<f64> {
        self.nearest_entry(target).map(|(f, _)| f)
    }

    /// Closest `(frequency, matrix)` pair to `target`
    pub fn nearest_entry(&self, target: f64) -> Result<(f64, &M)> {
        let idx = self.nearest_index(target)?;
        let (f, m) = &self.entries[idx];
        Ok((*f, m))
    }

    fn nearest_index(&self, target: f64) -> Result<usize> {
        let n = self.entries.len();
        if n == 0 {
            return Err(NetworkError::EmptyCollection);
        }
        if target.is_nan() {
            return Err(NetworkError::InvalidArgument(
                "target frequency is NaN".to_string(),
            ));
        }

        let idx = match self.entries.partition_point(|(f, _)| *f < target) {
            0 => 0,
            i if i == n => n - 1,
            i => {
                let below = target - self.entries[i - 1].0;
                let above = self.entries[i].0 - target;
                if below < above {
                    i - 1
                } else if above < below {
                    i
                } else {
                    match self.tie_break {
                        NearestTieBreak::PreferLower => i - 1,
                        NearestTieBreak::PreferUpper => i,
                    }
                }
            }
        };

        trace!(target_hz = target, chosen_hz = self.entries[idx].0, "nearest frequency");
        Ok(idx)
    }
}
