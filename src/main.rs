use clap::Parser;
use prime_count::args::Args;
use prime_count::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("prime_count: {e}");
            return ExitCode::FAILURE;
        }
    };

    match prime_count::app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("prime_count: {e}");
            ExitCode::FAILURE
        }
    }
}
