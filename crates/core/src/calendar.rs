// crates/core/src/calendar.rs
//! Day-of-week classification.
//!
//! Unrelated to the prime utilities; kept in its own module so each
//! domain stays independently testable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a numeric day-of-week code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
    Invalid,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
            Self::Invalid => "invalid",
        };
        f.write_str(label)
    }
}

/// Map a day code to its classification: 1-5 is a weekday, 6-7 a weekend
/// day. Any other code yields [`DayType::Invalid`] as a normal return
/// value, not an error.
#[must_use]
pub const fn classify_day(day: u8) -> DayType {
    match day {
        1..=5 => DayType::Weekday,
        6 | 7 => DayType::Weekend,
        _ => DayType::Invalid,
    }
}
