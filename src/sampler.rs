//! Weighted sampling over a fixed set of permissible values.
//!
//! A [`WeightedSampler`] pairs an ordered list of values with a probability per
//! value and owns the generator it draws from. Every draw consumes one uniform
//! number and maps it through the [`CumulativeTable`]; over many draws the
//! frequency of `values[i]` approaches `probabilities[i]`.
//!
//! Notes:
//! - [`WeightedSampler::new`] seeds a [`StdRng`] from the OS; use
//!   [`WeightedSampler::with_rng`] (or [`WeightedSampler::sample_with`]) when
//!   determinism matters (tests/benches).
//! - Draws take `&mut self`. Share a sampler across threads behind a `Mutex`, or
//!   give each thread its own.

use rand::distr::Distribution;
use rand::prelude::*;

use crate::generator::NumberGenerator;
use crate::table::{CumulativeTable, DistributionError};

/// Draws permissible values according to a fixed discrete distribution.
#[derive(Debug, Clone)]
pub struct WeightedSampler<V, R = StdRng> {
    values: Vec<V>,
    table: CumulativeTable,
    rng: R,
}

impl<V> WeightedSampler<V, StdRng> {
    /// Create a sampler backed by an OS-seeded [`StdRng`].
    ///
    /// # Errors
    ///
    /// See [`WeightedSampler::with_rng`].
    pub fn new(
        values: impl Into<Vec<V>>,
        probabilities: impl Into<Vec<f64>>,
    ) -> Result<Self, DistributionError> {
        Self::with_rng(values, probabilities, StdRng::from_os_rng())
    }
}

impl<V, R: Rng> WeightedSampler<V, R> {
    /// Create a sampler that draws from `rng`.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`DistributionError::EmptyValues`]
    /// - [`DistributionError::EmptyProbabilities`]
    /// - [`DistributionError::LengthMismatch`]
    /// - [`DistributionError::SumOutOfTolerance`]
    pub fn with_rng(
        values: impl Into<Vec<V>>,
        probabilities: impl Into<Vec<f64>>,
        rng: R,
    ) -> Result<Self, DistributionError> {
        let values = values.into();
        let probabilities = probabilities.into();

        if values.is_empty() {
            return Err(DistributionError::EmptyValues);
        }
        if probabilities.is_empty() {
            return Err(DistributionError::EmptyProbabilities);
        }
        if values.len() != probabilities.len() {
            return Err(DistributionError::LengthMismatch {
                values: values.len(),
                probabilities: probabilities.len(),
            });
        }

        let table = CumulativeTable::new(probabilities)?;
        log::debug!("weighted sampler ready: {} values", values.len());

        Ok(Self { values, table, rng })
    }

    /// Draw the index of the next value.
    #[inline]
    pub fn draw_index(&mut self) -> usize {
        self.table.sample(&mut self.rng)
    }

    /// Draw the next value by reference.
    #[inline]
    pub fn draw_ref(&mut self) -> &V {
        let i = self.draw_index();
        &self.values[i]
    }

    /// Draw the next value.
    #[inline]
    pub fn draw(&mut self) -> V
    where
        V: Clone,
    {
        self.draw_ref().clone()
    }

    /// Draw `n` times and count hits per position, in `values` order.
    ///
    /// Duplicate values are counted separately for each position they occupy.
    pub fn tally(&mut self, n: usize) -> Vec<(V, usize)>
    where
        V: Clone,
    {
        let mut counts = vec![0usize; self.values.len()];
        for _ in 0..n {
            counts[self.draw_index()] += 1;
        }
        self.values.iter().cloned().zip(counts).collect()
    }
}

impl<V, R> WeightedSampler<V, R> {
    /// Draw a value using a caller-supplied RNG instead of the owned one.
    pub fn sample_with<G: Rng + ?Sized>(&self, rng: &mut G) -> &V {
        &self.values[self.table.sample(rng)]
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn probabilities(&self) -> &[f64] {
        self.table.probabilities()
    }

    pub fn cumulative_probabilities(&self) -> &[f64] {
        self.table.cumulative()
    }

    /// Number of permissible values (always ≥ 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty inputs.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Clone, R: Rng> NumberGenerator for WeightedSampler<V, R> {
    type Output = V;

    fn next_value(&mut self) -> V {
        self.draw()
    }
}
