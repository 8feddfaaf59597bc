//! muhlog - muh2 IRC log classifier.
//!
//! Reads a muh2 channel log, classifies every line into chat events and
//! prints how many events of each kind it found.

mod config;
mod error;
mod reader;
mod tally;
mod telemetry;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use muh2_parse::LineContext;
use tracing::{error, info};

use crate::config::{Config, LogConfig};
use crate::reader::{resolve_date, LogReader};
use crate::tally::Tally;

/// Classify the lines of a muh2 IRC log.
#[derive(Parser, Debug)]
#[command(name = "muhlog", version, about)]
struct Args {
    /// Config file (defaults to ./muhlog.toml when present).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Date the log was written on, overriding config and file name.
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// The muh2 log file to read.
    #[arg(value_name = "LOGFILE")]
    log: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // No config means no log settings yet; report with the defaults.
            telemetry::init(&LogConfig::default());
            error!(path = ?args.config, error = %e, "Failed to load config");
            return Err(e.into());
        }
    };

    telemetry::init(&config.log);

    let date = resolve_date(args.date, config.parser.date, &args.log).map_err(|e| {
        error!(path = %args.log.display(), code = e.error_code(), "{}", e);
        e
    })?;
    let fallback = config
        .parser
        .fallback_encoding()
        .context("invalid parser.fallback_encoding")?;

    let span = telemetry::spans::log_file(&args.log, date);
    let _enter = span.enter();

    info!(encoding = fallback.name(), "Reading log");

    let reader = LogReader::new(LineContext::new(date), fallback);
    let mut tally = Tally::new();
    let stats = reader.read_file(&args.log, &mut tally).map_err(|e| {
        error!(code = e.error_code(), "{}", e);
        e
    })?;

    print!("{}", tally.report());

    info!(
        lines = stats.lines,
        empty = stats.empty,
        reencoded = stats.reencoded,
        events = stats.events,
        notices = tally.total_notices(),
        "Finished"
    );

    Ok(())
}
