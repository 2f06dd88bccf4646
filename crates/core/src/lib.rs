// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

//! Prime counting, range sieving, and a small day-of-week classifier.
//!
//! Four interchangeable algorithms answer the same query ("how many primes
//! lie below a bound" / "which primes lie in an inclusive range"),
//! differing only in asymptotic cost. Every function is pure: each call
//! owns its working table and nothing is shared or cached across calls,
//! so concurrent callers never contend.

pub use calendar::{DayType, classify_day};
pub use count::{
    Algorithm, count_primes_below, count_primes_sqrt, count_primes_trial,
};
pub use error::{PrimeCountError, Result};
pub use primality::{is_prime_sqrt, is_prime_trial};
pub use segment::{Segment, segmented_sieve};
pub use sieve::{count_primes_sieve, primes_below};

pub mod calendar;
pub mod count;
pub mod error;
pub mod primality;
pub mod segment;
pub mod sieve;
