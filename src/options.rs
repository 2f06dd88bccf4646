// src/options.rs
use clap::ValueEnum;
use prime_count_core::Algorithm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
}

/// Algorithm selector exposed on the command line. `All` runs every
/// counter side by side; the core crate only knows single algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "kebab-case")]
pub enum AlgorithmArg {
    TrialDivision,
    SqrtBound,
    Sieve,
    All,
}

impl AlgorithmArg {
    /// `None` means "compare all algorithms".
    #[must_use]
    pub const fn to_algorithm(self) -> Option<Algorithm> {
        match self {
            Self::TrialDivision => Some(Algorithm::TrialDivision),
            Self::SqrtBound => Some(Algorithm::SqrtBound),
            Self::Sieve => Some(Algorithm::Sieve),
            Self::All => None,
        }
    }
}
