// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use crate::report::{ComparisonReport, CountReport, DayReport, Report, SegmentReport};

pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(report),
        OutputFormat::Csv => print_delimited(report, ','),
        OutputFormat::Tsv => print_delimited(report, '\t'),
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Yaml => print_yaml(report)?,
    }
    Ok(())
}

fn print_table(report: &Report) {
    println!("prime_count v{}", crate::VERSION);
    println!();

    match report {
        Report::Count(count) => table_counts(std::slice::from_ref(count)),
        Report::Comparison(comparison) => table_comparison(comparison),
        Report::Segment(segment) => table_segment(segment),
        Report::Day(day) => table_day(day),
        Report::Demo(demo) => {
            table_comparison(&demo.comparison);
            println!();
            table_segment(&demo.segment);
        }
    }
}

fn table_comparison(report: &ComparisonReport) {
    println!("[Primes below {}]", report.bound);
    table_counts(&report.results);
}

fn table_counts(results: &[CountReport]) {
    println!("{:>9}      {:<16}{}", "COUNT", "ALGORITHM", "COST");
    println!("----------------------------------------------");
    for r in results {
        println!("{:>9}      {:<16}{}", r.count, r.algorithm, r.complexity);
    }
}

fn table_segment(report: &SegmentReport) {
    println!("[Primes in [{}, {}]]", report.low, report.high);
    let rendered: Vec<String> = report.primes.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    println!("---");
    println!("{:>9}      TOTAL", report.count);
}

fn table_day(report: &DayReport) {
    println!("day {}: {}", report.day, report.classification);
}

fn print_delimited(report: &Report, sep: char) {
    match report {
        Report::Count(count) => {
            println!("algorithm{sep}bound{sep}count");
            delimited_count_row(count, sep);
        }
        Report::Comparison(comparison) => {
            println!("algorithm{sep}bound{sep}count");
            for r in &comparison.results {
                delimited_count_row(r, sep);
            }
        }
        Report::Segment(segment) => delimited_segment(segment),
        Report::Day(day) => {
            println!("day{sep}classification");
            println!("{}{sep}{}", day.day, day.classification);
        }
        Report::Demo(demo) => {
            println!("algorithm{sep}bound{sep}count");
            for r in &demo.comparison.results {
                delimited_count_row(r, sep);
            }
            println!();
            delimited_segment(&demo.segment);
        }
    }
}

fn delimited_count_row(r: &CountReport, sep: char) {
    println!("{}{sep}{}{sep}{}", r.algorithm, r.bound, r.count);
}

fn delimited_segment(report: &SegmentReport) {
    println!("prime");
    for p in &report.primes {
        println!("{p}");
    }
}

fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_yaml(report: &Report) -> Result<()> {
    println!("{}", serde_yaml::to_string(report)?);
    Ok(())
}
