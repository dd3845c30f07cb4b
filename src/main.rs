use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};

mod checks;
mod dataset;
mod generate;
mod models;
mod normalize;
mod report;
mod score;

use crate::checks::CheckReport;
use crate::models::{RiskCategory, ScoredRecord};

#[derive(Parser)]
#[command(name = "student-risk-index")]
#[command(about = "Student risk scoring pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a synthetic archetype-balanced student dataset
    Generate {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 500)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a dataset and write it back with the risk columns appended
    Score {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Run the archetype cross-checks over a dataset
    Checks {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown risk report for a dataset
    Report {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { out, count, seed } => {
            let students = generate::generate_dataset(count, seed);
            dataset::write_students(&out, &students)?;
            println!("Wrote {} students to {}.", students.len(), out.display());
        }
        Commands::Score { input, output } => {
            let students = dataset::read_records(&input)?;
            println!("Loaded {} records from {}.", students.len(), input.display());

            let scored = score::score_records(&students);
            print_tier_summary(&scored);
            print_checks(&checks::run_checks(&scored));

            dataset::write_scored(&output, &scored)?;
            println!("Wrote scored dataset to {}.", output.display());
        }
        Commands::Checks { input, json } => {
            let students = dataset::read_records(&input)?;
            let scored = score::score_records(&students);
            let report = checks::run_checks(&scored);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_checks(&report);
            }
        }
        Commands::Report { input, out } => {
            let students = dataset::read_records(&input)?;
            let scored = score::score_records(&students);
            let report_checks = checks::run_checks(&scored);
            let report = report::build_report(&scored, &report_checks, Utc::now().date_naive());
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn print_tier_summary(scored: &[ScoredRecord]) {
    if scored.is_empty() {
        println!("No records to score.");
        return;
    }

    println!("Risk tiers:");
    for tier in RiskCategory::ALL.iter().rev() {
        let count = scored.iter().filter(|r| r.risk_category == *tier).count();
        println!("- {} ({}): {}", tier, tier.label(), count);
    }
}

fn print_checks(report: &CheckReport) {
    println!("Archetype cross-checks:");
    for outcome in report.outcomes() {
        if outcome.count == 0 {
            println!("- {}: no matches", outcome.name);
        } else {
            println!(
                "- {}: {} students (sample: {})",
                outcome.name,
                outcome.count,
                outcome.sample().join(", ")
            );
        }
    }
}
