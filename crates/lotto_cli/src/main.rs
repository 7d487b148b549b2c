//! Lotto CLI
//!
//! Command-line utilities over the history store and the unique-draw
//! generator: generate fresh draws, check and sort the data file, list
//! missing scheduled dates, and append records by hand.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use lotto_core::sampler::{GeneratorConfig, UniqueDrawGenerator, DEFAULT_MAX_TRIES_PER_PICK};
use lotto_core::types::Rules;
use lotto_store::{integrity, schedule, DrawRecord, HistoryStore};

/// Unique Powerball draw generation and history utilities
#[derive(Parser, Debug)]
#[command(name = "lotto")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate draws guaranteed absent from the history file
    Generate {
        /// History CSV file
        #[arg(short, long, value_name = "FILE")]
        data: PathBuf,

        /// Number of draws to produce
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Per-pick consecutive-rejection bound
        #[arg(long, default_value_t = DEFAULT_MAX_TRIES_PER_PICK)]
        max_tries: u64,
    },

    /// Check the structural integrity of a history file
    Check {
        /// History CSV file
        file: PathBuf,
    },

    /// List scheduled draw dates missing from a history file
    Missing {
        /// History CSV file
        file: PathBuf,

        /// Last date to check (defaults to today)
        #[arg(long)]
        through: Option<NaiveDate>,
    },

    /// Write a date-sorted copy of a history file
    Sort {
        /// History CSV file
        file: PathBuf,

        /// Sort oldest first instead of newest first
        #[arg(long)]
        ascending: bool,
    },

    /// Show the most recent draw in a history file
    Latest {
        /// History CSV file
        file: PathBuf,
    },

    /// Validate and append one historical draw
    Add {
        /// History CSV file
        file: PathBuf,

        /// Drawing date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// White numbers, comma separated (e.g. 4,8,15,16,23)
        #[arg(long, value_delimiter = ',')]
        whites: Vec<u16>,

        /// Red (bonus) number
        #[arg(long)]
        red: u16,

        /// Power-play multiplier, when known
        #[arg(long)]
        power_play: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let rules = Rules::powerball();

    match cli.command {
        Command::Generate {
            data,
            count,
            seed,
            max_tries,
        } => generate(&data, count, seed, max_tries, &rules),
        Command::Check { file } => check(&file, &rules),
        Command::Missing { file, through } => missing(&file, through, &rules),
        Command::Sort { file, ascending } => sort(&file, ascending, &rules),
        Command::Latest { file } => latest(&file, &rules),
        Command::Add {
            file,
            date,
            whites,
            red,
            power_play,
        } => add(&file, date, &whites, red, power_play, &rules),
    }
}

fn generate(
    data: &PathBuf,
    count: usize,
    seed: Option<u64>,
    max_tries: u64,
    rules: &Rules,
) -> anyhow::Result<()> {
    let store = HistoryStore::new(data, *rules);
    let history = store
        .load_history()
        .with_context(|| format!("loading history from {}", data.display()))?;
    tracing::info!(draws = history.len(), "history loaded");

    let mut builder = GeneratorConfig::builder()
        .count(count)
        .max_tries_per_pick(max_tries);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build().context("invalid generator configuration")?;

    let generator = UniqueDrawGenerator::new(*rules);
    let draws = generator
        .generate(&history, &config)
        .context("generation failed")?;

    for (i, draw) in draws.iter().enumerate() {
        println!("{:>2}) {}", i + 1, draw);
    }
    Ok(())
}

fn check(file: &PathBuf, rules: &Rules) -> anyhow::Result<()> {
    let store = HistoryStore::new(file, *rules);
    let report = integrity::check(&store)
        .with_context(|| format!("checking {}", file.display()))?;

    println!("Rows: {}", report.data_rows);
    println!("Header: {}", if report.header_ok { "ok" } else { "missing or wrong" });
    for date in &report.duplicate_dates {
        println!("Duplicate date: {}", date);
    }
    for problem in &report.problems {
        println!("Row {}: {}", problem.line, problem.reason);
    }

    if !report.is_clean() {
        bail!("integrity check failed for {}", file.display());
    }
    println!("OK");
    Ok(())
}

fn missing(file: &PathBuf, through: Option<NaiveDate>, rules: &Rules) -> anyhow::Result<()> {
    let store = HistoryStore::new(file, *rules);
    let records = store
        .load_records()
        .with_context(|| format!("loading {}", file.display()))?;
    let have: HashSet<NaiveDate> = records.iter().map(|r| r.date).collect();

    let through = through.unwrap_or_else(|| Local::now().date_naive());
    let missing = schedule::missing_dates(&have, through);

    println!(
        "Scheduled draws since {}: {}",
        schedule::rules_era_start(),
        have.len() + missing.len()
    );
    println!("Missing: {}", missing.len());
    for date in &missing {
        println!("{}", date);
    }
    Ok(())
}

fn sort(file: &PathBuf, ascending: bool, rules: &Rules) -> anyhow::Result<()> {
    let store = HistoryStore::new(file, *rules);
    let rows = store.row_count().unwrap_or(0);
    let out = store
        .write_sorted(!ascending)
        .with_context(|| format!("sorting {}", file.display()))?;
    println!("Sorted file written to {} (rows={})", out.display(), rows);
    Ok(())
}

fn latest(file: &PathBuf, rules: &Rules) -> anyhow::Result<()> {
    let store = HistoryStore::new(file, *rules);
    let record = store
        .latest()
        .with_context(|| format!("reading {}", file.display()))?;
    match record {
        Some(record) => {
            let draw = record.to_draw(rules).context("stored row is invalid")?;
            println!("{}  {}", record.date, draw);
            Ok(())
        }
        None => bail!("no rows in {}", file.display()),
    }
}

fn add(
    file: &PathBuf,
    date: NaiveDate,
    whites: &[u16],
    red: u16,
    power_play: Option<String>,
    rules: &Rules,
) -> anyhow::Result<()> {
    let mut record = DrawRecord::new(date, whites, red, rules).context("invalid draw")?;
    if let Some(pp) = power_play {
        record = record.with_power_play(pp);
    }

    let store = HistoryStore::new(file, *rules);
    store
        .append_record(&record)
        .with_context(|| format!("appending to {}", file.display()))?;
    let draw = record.to_draw(rules).context("invalid draw")?;
    println!("Added {}  {}", record.date, draw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args_parse() {
        let cli = Cli::try_parse_from([
            "lotto", "generate", "--data", "history.csv", "--count", "3", "--seed", "42",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                data, count, seed, ..
            } => {
                assert_eq!(data, PathBuf::from("history.csv"));
                assert_eq!(count, 3);
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_args_parse_whites_list() {
        let cli = Cli::try_parse_from([
            "lotto",
            "add",
            "history.csv",
            "--date",
            "2023-01-02",
            "--whites",
            "4,8,15,16,23",
            "--red",
            "9",
        ])
        .unwrap();
        match cli.command {
            Command::Add { whites, red, .. } => {
                assert_eq!(whites, vec![4, 8, 15, 16, 23]);
                assert_eq!(red, 9);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
