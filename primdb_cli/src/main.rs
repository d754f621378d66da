use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use primdb_core::config::{DbConfig, DEFAULT_DATA_DIR};
use primdb_core::Database;
use tracing_subscriber::EnvFilter;

mod formatter;
mod repl;

use repl::Repl;

/// Interactive shell for a flat-file record store
#[derive(Parser, Debug)]
#[command(name = "primdb", version, about)]
struct Args {
    /// Directory holding catalog.json and the table files
    #[arg(short = 'd', long, value_name = "DIR", default_value = DEFAULT_DATA_DIR, env = "PRIMDB_DATA_DIR")]
    data_dir: PathBuf,

    /// Do not ask for confirmation before drop_table and delete
    #[arg(short = 'y', long)]
    yes: bool,

    /// Remove a table's data file when the table is dropped
    #[arg(long)]
    purge_on_drop: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Log filter (error, warn, info, debug, trace or a full directive)
    #[arg(long, default_value = "warn", env = "PRIMDB_LOG")]
    log_level: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = DbConfig::new(&args.data_dir).purge_on_drop(args.purge_on_drop);
    let db = Database::open_with(config)
        .with_context(|| format!("failed to open data directory {}", args.data_dir.display()))?;

    Repl::new(db, args.yes)?.run()
}

fn init_logging(args: &Args) {
    let filter = if args.verbose {
        EnvFilter::new("primdb_core=debug,primdb_cli=debug")
    } else {
        EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
