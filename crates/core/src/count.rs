// crates/core/src/count.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primality::{is_prime_sqrt, is_prime_trial};
use crate::sieve::count_primes_sieve;

/// Counting strategy for [`count_primes_below`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    TrialDivision,
    SqrtBound,
    Sieve,
}

impl Algorithm {
    /// Asymptotic cost of counting all primes below a bound of `n`.
    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::TrialDivision => "O(n^2)",
            Self::SqrtBound => "O(n*sqrt(n))",
            Self::Sieve => "O(n log log n)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TrialDivision => "trial-division",
            Self::SqrtBound => "sqrt-bound",
            Self::Sieve => "sieve",
        };
        f.write_str(label)
    }
}

/// Count primes strictly below `bound` with the chosen algorithm.
///
/// The algorithms are interchangeable: for any bound they return the same
/// count and differ only in cost. Returns 0 when `bound <= 2`.
#[must_use]
pub fn count_primes_below(bound: usize, algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::TrialDivision => count_primes_trial(bound),
        Algorithm::SqrtBound => count_primes_sqrt(bound),
        Algorithm::Sieve => count_primes_sieve(bound),
    }
}

/// Count by full trial division over every candidate in `2..bound`.
#[must_use]
pub fn count_primes_trial(bound: usize) -> usize {
    (2..bound).filter(|&n| is_prime_trial(n as u64)).count()
}

/// Count by √n-bounded trial division over every candidate in `2..bound`.
#[must_use]
pub fn count_primes_sqrt(bound: usize) -> usize {
    (2..bound).filter(|&n| is_prime_sqrt(n as u64)).count()
}
