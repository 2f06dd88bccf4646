// crates/core/src/segment.rs
//! Segmented sieve over an inclusive range.
//!
//! Avoids allocating a full table of size `high` when only a window is
//! needed: every composite in `[low, high]` has a prime factor no larger
//! than √high, so base primes up to that limit are enough.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PrimeCountError, Result};
use crate::sieve::primes_below;

/// Inclusive range of integers to sieve, validated at construction.
///
/// A constructed segment always satisfies `1 <= low <= high`, so the
/// sieving functions over it are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    low: u64,
    high: u64,
}

impl Segment {
    /// Build a segment. Rejects `low < 1` and `high < low`.
    pub fn new(low: u64, high: u64) -> Result<Self> {
        if low < 1 || high < low {
            return Err(PrimeCountError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub const fn low(self) -> u64 {
        self.low
    }

    #[must_use]
    pub const fn high(self) -> u64 {
        self.high
    }

    /// Number of integers covered, endpoints included. Never zero: a
    /// constructed segment always contains at least `low` itself.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(self) -> u64 {
        self.high - self.low + 1
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Primes in `segment`, in increasing order.
#[must_use]
pub fn segmented_sieve(segment: Segment) -> Vec<u64> {
    let limit = (segment.high() as f64).sqrt() as u64 + 1;
    let base_primes = primes_below(limit as usize + 1);

    let mut candidate = vec![true; segment.len() as usize];

    for &p in &base_primes {
        let p = p as u64;
        // first multiple of p inside the window, never below p*p
        let first = (segment.low().div_ceil(p) * p).max(p * p);
        let mut multiple = first;
        while multiple <= segment.high() {
            candidate[(multiple - segment.low()) as usize] = false;
            multiple += p;
        }
    }

    // 1 has no prime factor, so the marking loops never reach it
    if segment.low() == 1 {
        candidate[0] = false;
    }

    candidate
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| {
            if c {
                Some(segment.low() + i as u64)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_ranges() {
        assert_eq!(
            Segment::new(150, 100),
            Err(PrimeCountError::InvalidRange { low: 150, high: 100 })
        );
        assert_eq!(
            Segment::new(0, 10),
            Err(PrimeCountError::InvalidRange { low: 0, high: 10 })
        );
    }

    #[test]
    fn hundred_to_one_fifty() {
        let segment = Segment::new(100, 150).unwrap();
        assert_eq!(
            segmented_sieve(segment),
            vec![101, 103, 107, 109, 113, 127, 131, 137, 139, 149]
        );
    }

    #[test]
    fn excludes_one() {
        let segment = Segment::new(1, 10).unwrap();
        assert_eq!(segmented_sieve(segment), vec![2, 3, 5, 7]);
    }

    #[test]
    fn single_value_segments() {
        assert!(segmented_sieve(Segment::new(1, 1).unwrap()).is_empty());
        assert_eq!(segmented_sieve(Segment::new(2, 2).unwrap()), vec![2]);
        assert!(segmented_sieve(Segment::new(9, 9).unwrap()).is_empty());
    }

    #[test]
    fn keeps_small_base_primes_inside_window() {
        // a base prime inside the window must not cross itself off
        let segment = Segment::new(2, 13).unwrap();
        assert_eq!(segmented_sieve(segment), vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn len_counts_inclusive_endpoints() {
        assert_eq!(Segment::new(100, 150).unwrap().len(), 51);
        assert_eq!(Segment::new(7, 7).unwrap().len(), 1);
    }

    #[test]
    fn display_shows_endpoints() {
        assert_eq!(Segment::new(100, 150).unwrap().to_string(), "[100, 150]");
    }
}
