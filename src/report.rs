// src/report.rs
use prime_count_core::{Algorithm, DayType};
use serde::Serialize;

/// Result of a single counting run.
#[derive(Debug, Clone, Serialize)]
pub struct CountReport {
    pub algorithm: Algorithm,
    pub complexity: &'static str,
    pub bound: usize,
    pub count: usize,
}

/// Side-by-side counts from every algorithm at the same bound.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub bound: usize,
    pub results: Vec<CountReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    pub low: u64,
    pub high: u64,
    pub count: usize,
    pub primes: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub day: u8,
    pub classification: DayType,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub comparison: ComparisonReport,
    pub segment: SegmentReport,
}

/// Everything the binary can print.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Count(CountReport),
    Comparison(ComparisonReport),
    Segment(SegmentReport),
    Day(DayReport),
    Demo(DemoReport),
}
