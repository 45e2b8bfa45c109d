use probgen::{CumulativeTable, DistributionError, WeightedSampler, TOLERANCE};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Positive weights normalized into a probability vector.
fn distribution(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1e-3f64..1.0, 1..max_len).prop_map(|w| {
        let total: f64 = w.iter().sum();
        w.into_iter().map(|x| x / total).collect()
    })
}

proptest! {
    #[test]
    fn prop_draws_are_members(
        probs in distribution(20),
        seed in any::<u64>(),
    ) {
        let values: Vec<usize> = (0..probs.len()).map(|i| i * 10).collect();
        let mut s = WeightedSampler::with_rng(
            values.clone(),
            probs,
            ChaCha8Rng::seed_from_u64(seed),
        ).expect("normalized");

        for _ in 0..200 {
            let v = s.draw();
            prop_assert!(values.contains(&v));
        }
    }

    #[test]
    fn prop_cumulative_table_invariants(probs in distribution(30)) {
        let t = CumulativeTable::new(probs.clone()).expect("normalized");

        prop_assert_eq!(t.len(), probs.len());
        prop_assert!(t.cumulative().windows(2).all(|w| w[0] <= w[1]));
        let last = t.cumulative()[t.len() - 1];
        prop_assert!((last - 1.0).abs() < TOLERANCE, "last was {}", last);
    }

    #[test]
    fn prop_bucket_in_range(
        probs in distribution(30),
        u in 0.0f64..1.0,
    ) {
        let t = CumulativeTable::new(probs).expect("normalized");
        let i = t.bucket(u);

        prop_assert!(i < t.len());
        // First bucket whose prefix sum exceeds u, unless it is the last one.
        if i + 1 < t.len() {
            prop_assert!(u < t.cumulative()[i]);
        }
        if i > 0 {
            prop_assert!(u >= t.cumulative()[i - 1]);
        }
    }

    #[test]
    fn prop_length_mismatch_rejected(
        n_values in 1usize..20,
        probs in distribution(20),
    ) {
        prop_assume!(n_values != probs.len());
        let values: Vec<usize> = (0..n_values).collect();
        let n_probs = probs.len();
        let err = WeightedSampler::new(values, probs).expect_err("mismatch");

        prop_assert_eq!(
            err,
            DistributionError::LengthMismatch { values: n_values, probabilities: n_probs }
        );
    }

    #[test]
    fn prop_scaled_sums_rejected(
        probs in distribution(20),
        scale in prop_oneof![0.5f64..0.99, 1.01f64..2.0],
    ) {
        let scaled: Vec<f64> = probs.iter().map(|p| p * scale).collect();
        let values: Vec<usize> = (0..scaled.len()).collect();
        let err = WeightedSampler::new(values, scaled).expect_err("bad sum");

        let is_sum_error = matches!(err, DistributionError::SumOutOfTolerance { .. });
        prop_assert!(is_sum_error);
    }

    #[test]
    fn prop_validation_is_repeatable(
        probs in prop::collection::vec(-0.5f64..1.5, 1..10),
    ) {
        let values: Vec<usize> = (0..probs.len()).collect();
        let a = WeightedSampler::new(values.clone(), probs.clone()).map(|_| ());
        let b = WeightedSampler::new(values, probs).map(|_| ());

        prop_assert_eq!(a, b);
    }
}

#[test]
fn zero_probability_values_never_drawn() {
    let mut s = WeightedSampler::with_rng(
        vec!["never", "always", "never-either"],
        vec![0.0, 1.0, 0.0],
        ChaCha8Rng::seed_from_u64(11),
    )
    .expect("valid");

    for _ in 0..10_000 {
        assert_eq!(s.draw(), "always");
    }
}

#[test]
fn legacy_out_of_range_probabilities_accepted() {
    // Only the sum is validated; the negative bucket is simply unreachable.
    let mut s = WeightedSampler::with_rng(
        vec![1, 2],
        vec![-0.5, 1.5],
        ChaCha8Rng::seed_from_u64(5),
    )
    .expect("sum is 1");

    for _ in 0..1_000 {
        assert_eq!(s.draw(), 2);
    }
}

#[test]
fn empirical_distribution_matches() {
    // Deterministic chi-squared smoke test over many seeds' worth of draws.
    let probs = [0.1, 0.2, 0.3, 0.4];
    let n = 200_000;
    let mut s = WeightedSampler::with_rng(
        vec!['a', 'b', 'c', 'd'],
        probs,
        ChaCha8Rng::seed_from_u64(2024),
    )
    .expect("valid");

    let counts = s.tally(n);
    let chi2: f64 = counts
        .iter()
        .zip(probs.iter())
        .map(|((_, c), &p)| {
            let expected = n as f64 * p;
            let diff = *c as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // df = 3; use a conservative cutoff to avoid false positives.
    assert!(chi2 < 25.0, "chi2 too large (chi2={chi2:.2}). counts={counts:?}");
}
