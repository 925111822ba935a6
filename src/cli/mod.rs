//! `gatetrack` command-line interface.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::clock::{parse_date, Clock, FixedClock, SystemClock};
use crate::config;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "gatetrack", version, about = "GATE exam preparation tracker")]
pub struct Cli {
    /// Directory holding the tracker's JSON files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_day)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the weekly study plan
    Schedule {
        /// Start date (defaults to the configured plan start)
        #[arg(long, value_parser = parse_day)]
        start: Option<NaiveDate>,

        /// Only show the week in progress
        #[arg(long)]
        current: bool,
    },

    /// Save the study log for a day (fields not given keep their saved value)
    Log(LogArgs),

    /// Show today's log and daily targets
    Today,

    /// Report whether yesterday went unlogged
    Missed,

    /// Day-by-day status for a month
    Calendar {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// List syllabus subtopics and completion
    Syllabus,

    /// Flip a subtopic between done and not done
    Toggle {
        /// Subject id, e.g. "calculus"
        subject: String,

        /// Zero-based subtopic index
        index: usize,
    },

    /// Mock test scores
    Mock {
        #[command(subcommand)]
        action: MockCommand,
    },

    /// Overall progress summary
    Dashboard {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Coding practice totals and recent activity
    Coding,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Day to log (defaults to today)
    #[arg(long, value_parser = parse_day)]
    date: Option<NaiveDate>,

    #[arg(long)]
    gate_hours: Option<f64>,

    #[arg(long)]
    coding_hours: Option<f64>,

    #[arg(long)]
    dsa_hours: Option<f64>,

    #[arg(long)]
    revision_hours: Option<f64>,

    /// Coding problems solved
    #[arg(long)]
    problems: Option<u32>,

    #[arg(long)]
    gate_topics: Option<String>,

    #[arg(long)]
    coding_topics: Option<String>,

    #[arg(long)]
    dsa_topic: Option<String>,

    #[arg(long)]
    notes: Option<String>,

    /// Coding profile URL
    #[arg(long)]
    profile: Option<String>,
}

#[derive(Subcommand, Debug)]
enum MockCommand {
    /// Record an attempt
    Add {
        #[arg(long)]
        score: f64,

        #[arg(long, default_value = "100")]
        total: f64,

        /// Attempt date (defaults to today)
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
    },

    /// List attempts oldest first
    List,
}

fn parse_day(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// Parse arguments from the process command line and execute.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::load_or_default(&config::default_config_path()),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    crate::logging::init_logging(config.json_logs);

    let clock: Arc<dyn Clock> = match cli.today {
        Some(day) => Arc::new(FixedClock(day)),
        None => Arc::new(SystemClock),
    };
    let mut state = AppState::open_with_clock(config, clock);

    match cli.command {
        Commands::Schedule { start, current } => commands::schedule(&mut state, start, current),
        Commands::Log(args) => commands::log(&mut state, args),
        Commands::Today => commands::today(&state),
        Commands::Missed => commands::missed(&state),
        Commands::Calendar { month } => commands::calendar(&state, month.as_deref()),
        Commands::Syllabus => commands::syllabus(&state),
        Commands::Toggle { subject, index } => commands::toggle(&mut state, &subject, index),
        Commands::Mock { action } => match action {
            MockCommand::Add { score, total, date } => commands::mock_add(&mut state, score, total, date),
            MockCommand::List => commands::mock_list(&state),
        },
        Commands::Dashboard { json } => commands::dashboard(&mut state, json),
        Commands::Coding => commands::coding(&state),
    }
}
