//! `probgen`: discrete weighted sampling.
//!
//! Given permissible values and one probability per value, draw values so that
//! over many draws the frequency of each value approaches its probability.
//!
//! Exposed modules:
//! - `sampler`: [`WeightedSampler`], which owns values, table and RNG.
//! - `table`: [`CumulativeTable`] (validation, prefix sums, bucket lookup).
//! - `generator`: the [`NumberGenerator`] trait.
//!
//! ```
//! use probgen::WeightedSampler;
//!
//! let mut s = WeightedSampler::new(vec![-1, 0, 1], vec![0.2, 0.5, 0.3])?;
//! let v = s.draw();
//! assert!([-1, 0, 1].contains(&v));
//! # Ok::<(), probgen::DistributionError>(())
//! ```

#![forbid(unsafe_code)]

pub mod generator;
pub mod sampler;
pub mod table;

pub use generator::NumberGenerator;
pub use sampler::WeightedSampler;
pub use table::{approx_eq, cumulative_sum, CumulativeTable, DistributionError, TOLERANCE};
