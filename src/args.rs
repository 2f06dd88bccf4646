// src/args.rs
use clap::Parser;

use crate::VERSION;
use crate::options::{AlgorithmArg, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "prime_count",
    version = VERSION,
    about = "Prime counting and range sieving toolkit"
)]
pub struct Args {
    /// Count primes strictly below this bound
    #[arg(long)]
    pub below: Option<usize>,

    /// Counting algorithm for --below (`all` compares every algorithm)
    #[arg(long, value_enum, default_value = "sieve")]
    pub algorithm: AlgorithmArg,

    /// Sieve an inclusive range of integers
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
    pub segment: Option<Vec<u64>>,

    /// Classify a day-of-week code (1-7)
    #[arg(long)]
    pub day: Option<u8>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}
