// src/config.rs
use prime_count_core::{Algorithm, Segment};

use crate::args::Args;
use crate::error::Result;
use crate::options::OutputFormat;

/// Operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// No operation flag given: algorithm comparison at 30, then the
    /// sample segment [100, 150].
    Demo,
    Count { bound: usize, algorithm: Algorithm },
    Compare { bound: usize },
    Segment(Segment),
    Day(u8),
}

#[derive(Debug)]
pub struct Config {
    pub request: Request,
    pub format: OutputFormat,
}

impl Config {
    /// Validate raw arguments into a runnable configuration.
    ///
    /// When several operation flags are given, precedence is `--day`,
    /// then `--segment`, then `--below`.
    pub fn from_args(args: Args) -> Result<Self> {
        let request = if let Some(day) = args.day {
            Request::Day(day)
        } else if let Some(pair) = args.segment {
            // clap enforces exactly two values for --segment
            Request::Segment(Segment::new(pair[0], pair[1])?)
        } else if let Some(bound) = args.below {
            match args.algorithm.to_algorithm() {
                Some(algorithm) => Request::Count { bound, algorithm },
                None => Request::Compare { bound },
            }
        } else {
            Request::Demo
        };

        Ok(Self { request, format: args.format })
    }
}
