// crates/core/src/error.rs
use thiserror::Error;

/// Root error type for the core library.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrimeCountError {
    /// A segment violated its precondition (`low >= 1 && low <= high`).
    #[error("invalid segment range [{low}, {high}]: expected 1 <= low <= high")]
    InvalidRange { low: u64, high: u64 },
}

pub type Result<T> = std::result::Result<T, PrimeCountError>;
