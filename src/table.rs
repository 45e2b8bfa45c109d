//! Cumulative probability tables.
//!
//! A [`CumulativeTable`] holds a validated probability vector together with its
//! prefix sums. Mapping a uniform number \(u \in [0, 1)\) to a bucket is a linear
//! scan for the first prefix sum strictly greater than \(u\):
//!
//! \[
//! \mathrm{bucket}(u) = \min \{ i < n - 1 : u < c_i \}, \quad \text{else } n - 1
//! \]
//!
//! The last bucket takes whatever is left, so float residue in the prefix sums
//! (e.g. a final entry of `0.9999999999999999`) never leaves a draw unassigned.

use rand::distr::Distribution;
use rand::Rng;

/// Maximum allowed deviation of a probability sum from 1.0.
pub const TOLERANCE: f64 = 1e-6;

/// Errors raised while validating a distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// No permissible values were given.
    EmptyValues,
    /// No probabilities were given.
    EmptyProbabilities,
    /// `values` and `probabilities` have different lengths.
    LengthMismatch { values: usize, probabilities: usize },
    /// Probabilities do not sum to 1 within [`TOLERANCE`].
    SumOutOfTolerance { sum: f64 },
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValues => write!(f, "permissible values must be non-empty"),
            Self::EmptyProbabilities => write!(f, "probabilities must be non-empty"),
            Self::LengthMismatch {
                values,
                probabilities,
            } => write!(
                f,
                "values and probabilities must have the same length (got {values} values, {probabilities} probabilities)"
            ),
            Self::SumOutOfTolerance { sum } => write!(
                f,
                "probabilities must sum to 1 within {TOLERANCE:e} (got {sum})"
            ),
        }
    }
}

impl std::error::Error for DistributionError {}

/// Running left-to-right sum: `out[i] = xs[0] + ... + xs[i]`.
pub fn cumulative_sum(xs: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    xs.iter()
        .map(|&x| {
            sum += x;
            sum
        })
        .collect()
}

/// `|a - b| < threshold`. NaN on either side compares unequal.
#[inline]
pub fn approx_eq(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() < threshold
}

/// Validated probabilities and their prefix sums.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
}

impl CumulativeTable {
    /// Validate `probabilities` and build the prefix sums.
    ///
    /// Only the total is checked. Individual entries outside `[0, 1]` are
    /// accepted as long as the sum works out; they are reported at `warn` level.
    pub fn new(probabilities: impl Into<Vec<f64>>) -> Result<Self, DistributionError> {
        let probabilities = probabilities.into();
        if probabilities.is_empty() {
            return Err(DistributionError::EmptyProbabilities);
        }

        let cumulative = cumulative_sum(&probabilities);
        let sum = cumulative[cumulative.len() - 1];
        if !approx_eq(sum, 1.0, TOLERANCE) {
            return Err(DistributionError::SumOutOfTolerance { sum });
        }

        for (i, &p) in probabilities.iter().enumerate() {
            if !(0.0..=1.0).contains(&p) {
                log::warn!("probability[{i}] = {p} is outside [0, 1]; accepted since the sum is 1");
            }
        }

        Ok(Self {
            probabilities,
            cumulative,
        })
    }

    /// Bucket index for a uniform number `u` in `[0, 1)`.
    ///
    /// Comparison is strict: `u == cumulative[i]` lands in bucket `i + 1`.
    #[inline]
    pub fn bucket(&self, u: f64) -> usize {
        let last = self.cumulative.len() - 1;
        self.cumulative[..last]
            .iter()
            .position(|&c| u < c)
            .unwrap_or(last)
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Number of buckets (always ≥ 1).
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`: a table has at least one bucket.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

impl Distribution<usize> for CumulativeTable {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.bucket(rng.random::<f64>())
    }
}
