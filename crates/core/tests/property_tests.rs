// crates/core/tests/property_tests.rs
use prime_count_core::{
    Algorithm, Segment, count_primes_below, is_prime_sqrt, is_prime_trial, primes_below,
    segmented_sieve,
};
use proptest::prelude::*;

proptest! {
    /// The three counters answer the same query; they may never disagree.
    #[test]
    fn counting_algorithms_agree(bound in 0usize..400) {
        let sieve = count_primes_below(bound, Algorithm::Sieve);
        prop_assert_eq!(count_primes_below(bound, Algorithm::TrialDivision), sieve);
        prop_assert_eq!(count_primes_below(bound, Algorithm::SqrtBound), sieve);
    }

    #[test]
    fn predicates_agree(n in 0u64..5_000) {
        prop_assert_eq!(is_prime_trial(n), is_prime_sqrt(n));
    }

    /// Sieving a window must match the full sieve restricted to it.
    #[test]
    fn segmented_sieve_matches_full_sieve(low in 1u64..500, span in 0u64..300) {
        let segment = Segment::new(low, low + span).unwrap();
        let expected: Vec<u64> = primes_below((low + span + 1) as usize)
            .into_iter()
            .map(|p| p as u64)
            .filter(|&p| p >= low)
            .collect();
        prop_assert_eq!(segmented_sieve(segment), expected);
    }

    #[test]
    fn calls_are_pure(bound in 0usize..300) {
        prop_assert_eq!(
            count_primes_below(bound, Algorithm::Sieve),
            count_primes_below(bound, Algorithm::Sieve)
        );
        let segment = Segment::new(1, bound as u64 + 1).unwrap();
        prop_assert_eq!(segmented_sieve(segment), segmented_sieve(segment));
    }
}
