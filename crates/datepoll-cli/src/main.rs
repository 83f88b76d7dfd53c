//! `datepoll` CLI: evaluate group date-poll snapshots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Which candidate dates work for everyone who answered? (stdin → stdout)
//! cat snapshot.json | datepoll evaluate
//!
//! # Participant × date matrix, from file to file
//! datepoll pivot -i snapshot.json -o matrix.json
//!
//! # Per-date answers with comments
//! datepoll results -i snapshot.json
//!
//! # Plain-text table, feasible dates marked with '*'
//! datepoll table -i snapshot.json
//!
//! # Start a new poll covering a date range
//! datepoll create --name "Team dinner" --start 2026-11-02 --end 2026-11-08 -o poll.json
//!
//! # Record (or replace) one participant's answers
//! datepoll submit -i poll.json --response alice.json -o poll.json
//! ```

use std::fs;
use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use datepoll_engine::{
    evaluate, event_results, pivot, AvailabilityModel, EngineConfig, Event, Snapshot, Submission,
    ValidationError,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "datepoll",
    version,
    about = "Find the dates that work for everyone in a group poll"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report, for every candidate date, whether everyone who answered can meet
    Evaluate {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Pivot answers into a participant × date matrix
    Pivot {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List every candidate date with its feasibility and answers
    Results {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print a plain-text date × participant table
    Table {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Create an empty poll whose candidate dates span a range
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// First candidate date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last candidate date (YYYY-MM-DD), inclusive
        #[arg(long)]
        end: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Record a participant's answers, replacing any earlier submission
    Submit {
        /// Snapshot file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Submission JSON: {"participantName": ..., "entries": [...]}
        #[arg(short, long)]
        response: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => EngineConfig::default(),
    };
    debug!(max_range_days = config.max_range_days, "engine config");

    match cli.command {
        Commands::Evaluate { input, output } => {
            let model = load_model(input.as_deref())?;
            write_json(output.as_deref(), &evaluate(&model))?;
        }
        Commands::Pivot { input, output } => {
            let model = load_model(input.as_deref())?;
            write_json(output.as_deref(), &pivot(&model))?;
        }
        Commands::Results { input, output } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let model = AvailabilityModel::from_snapshot(&snapshot).map_err(rejected)?;
            write_json(output.as_deref(), &event_results(&snapshot, &model))?;
        }
        Commands::Table { input } => {
            let model = load_model(input.as_deref())?;
            write_output(None, &render_table(&model))?;
        }
        Commands::Create {
            name,
            description,
            start,
            end,
            output,
        } => {
            let event = Event::from_range(&name, &description, &start, &end, &config)
                .map_err(rejected)?;
            write_json(output.as_deref(), &event.snapshot())?;
        }
        Commands::Submit {
            input,
            response,
            output,
        } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let mut event = Event::from_snapshot(&snapshot).map_err(rejected)?;

            let raw = fs::read_to_string(&response)
                .with_context(|| format!("Failed to read file: {}", response))?;
            let submission =
                Submission::from_json(&raw).context("Failed to parse submission JSON")?;
            event.submit(submission).map_err(rejected)?;

            write_json(output.as_deref(), &event.snapshot())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Attach the machine-readable reason code to a validation failure.
fn rejected(err: ValidationError) -> anyhow::Error {
    anyhow!("{}: {}", err.code(), err)
}

fn read_snapshot(path: Option<&str>) -> Result<Snapshot> {
    let json = read_input(path)?;
    Snapshot::from_json(&json).context("Failed to parse snapshot JSON")
}

fn load_model(path: Option<&str>) -> Result<AvailabilityModel> {
    let snapshot = read_snapshot(path)?;
    AvailabilityModel::from_snapshot(&snapshot).map_err(rejected)
}

/// Render dates as rows and participants as columns; feasible dates are starred.
fn render_table(model: &AvailabilityModel) -> String {
    let participants = model.all_participants();
    let widths: Vec<usize> = participants
        .iter()
        .map(|name| name.chars().count().max(1))
        .collect();
    let feasibility = evaluate(model);

    let mut out = String::new();
    out.push_str("  date      ");
    for (name, width) in participants.iter().zip(&widths) {
        out.push_str(&format!("  {:<width$}", name, width = *width));
    }
    out.push('\n');

    for result in &feasibility {
        let marker = if result.feasible { '*' } else { ' ' };
        out.push_str(&format!("{} {}", marker, result.date));
        for (name, width) in participants.iter().zip(&widths) {
            let symbol = model.status_of(name, result.date).symbol();
            out.push_str(&format!("  {:<width$}", symbol, width = *width));
        }
        out.push('\n');
    }

    out
}

/// Read a file, or all of stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    let Some(path) = path else {
        return io::read_to_string(io::stdin()).context("Failed to read from stdin");
    };
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    write_output(path, &json)
}

/// Write to a file, or to stdout when no path is given.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    if let Some(path) = path {
        return fs::write(path, content).with_context(|| format!("Failed to write file: {}", path));
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}
