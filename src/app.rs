// src/app.rs
use prime_count_core::{
    Algorithm, Segment, classify_day, count_primes_below, segmented_sieve,
};

use crate::config::{Config, Request};
use crate::error::Result;
use crate::presentation;
use crate::report::{
    ComparisonReport, CountReport, DayReport, DemoReport, Report, SegmentReport,
};

/// Demonstration inputs printed when no operation flag is given.
const DEMO_BOUND: usize = 30;
const DEMO_SEGMENT: (u64, u64) = (100, 150);

pub fn run(config: &Config) -> Result<()> {
    let report = build_report(config.request)?;
    presentation::print_report(&report, config.format)
}

pub fn build_report(request: Request) -> Result<Report> {
    let report = match request {
        Request::Count { bound, algorithm } => Report::Count(count_report(bound, algorithm)),
        Request::Compare { bound } => Report::Comparison(comparison_report(bound)),
        Request::Segment(segment) => Report::Segment(segment_report(segment)),
        Request::Day(day) => {
            Report::Day(DayReport { day, classification: classify_day(day) })
        }
        Request::Demo => {
            let (low, high) = DEMO_SEGMENT;
            Report::Demo(DemoReport {
                comparison: comparison_report(DEMO_BOUND),
                segment: segment_report(Segment::new(low, high)?),
            })
        }
    };
    Ok(report)
}

fn count_report(bound: usize, algorithm: Algorithm) -> CountReport {
    CountReport {
        algorithm,
        complexity: algorithm.complexity(),
        bound,
        count: count_primes_below(bound, algorithm),
    }
}

fn comparison_report(bound: usize) -> ComparisonReport {
    const ALGORITHMS: [Algorithm; 3] =
        [Algorithm::TrialDivision, Algorithm::SqrtBound, Algorithm::Sieve];

    ComparisonReport {
        bound,
        results: ALGORITHMS.iter().map(|&a| count_report(bound, a)).collect(),
    }
}

fn segment_report(segment: Segment) -> SegmentReport {
    let primes = segmented_sieve(segment);
    SegmentReport {
        low: segment.low(),
        high: segment.high(),
        count: primes.len(),
        primes,
    }
}
